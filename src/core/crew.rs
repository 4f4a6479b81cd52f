use crate::domain::ports::{Sleepable, Workable};

#[derive(Debug, Default, Clone, Copy)]
pub struct HumanWorker;

impl Workable for HumanWorker {
    fn work(&self) {
        tracing::info!("human worker on shift");
    }
}

impl Sleepable for HumanWorker {
    fn sleep(&self) {
        tracing::info!("human worker off to sleep");
    }
}

/// Declares only the capability it has. There is no stubbed-out `sleep`
/// anywhere because nothing forces one.
#[derive(Debug, Default, Clone, Copy)]
pub struct RobotWorker;

impl Workable for RobotWorker {
    fn work(&self) {
        tracing::info!("robot worker on shift");
    }
}

pub fn run_shift(crew: &[&dyn Workable]) {
    for worker in crew {
        worker.work();
    }
}

pub fn rest(crew: &[&dyn Sleepable]) {
    for worker in crew {
        worker.sleep();
    }
}
