use crate::domain::ports::Area;
use crate::utils::error::Result;
use crate::utils::validation::validate_dimension;

pub const DEFAULT_UNIT_COST: f64 = 1.5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    width: f64,
    height: f64,
}

impl Rectangle {
    pub fn new(width: f64, height: f64) -> Result<Self> {
        validate_dimension("width", width)?;
        validate_dimension("height", height)?;
        Ok(Self { width, height })
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }
}

impl Area for Rectangle {
    fn area(&self) -> f64 {
        self.width * self.height
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    radius: f64,
}

impl Circle {
    pub fn new(radius: f64) -> Result<Self> {
        validate_dimension("radius", radius)?;
        Ok(Self { radius })
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl Area for Circle {
    fn area(&self) -> f64 {
        std::f64::consts::PI * self.radius * self.radius
    }
}

/// Prices shapes through the `Area` capability alone. Adding a new shape
/// never touches this type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CostManager {
    unit_cost: f64,
}

impl Default for CostManager {
    fn default() -> Self {
        Self {
            unit_cost: DEFAULT_UNIT_COST,
        }
    }
}

impl CostManager {
    pub fn new(unit_cost: f64) -> Self {
        Self { unit_cost }
    }

    pub fn unit_cost(&self) -> f64 {
        self.unit_cost
    }

    pub fn calculate(&self, shape: &dyn Area) -> f64 {
        self.unit_cost * shape.area()
    }

    pub fn total(&self, shapes: &[Box<dyn Area>]) -> f64 {
        shapes.iter().map(|shape| self.calculate(shape.as_ref())).sum()
    }
}

pub fn total_area<'a, I>(shapes: I) -> f64
where
    I: IntoIterator<Item = &'a dyn Area>,
{
    shapes.into_iter().map(Area::area).sum()
}
