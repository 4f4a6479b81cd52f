use crate::domain::ports::{AccessGate, Connection};
use crate::utils::error::Result;

/// Fixed-answer gate. Stands in for whatever authentication backend the
/// deployment actually has; report code only ever sees the capability.
#[derive(Debug, Clone, Copy)]
pub struct StaticGate {
    allowed: bool,
}

impl StaticGate {
    pub fn allow() -> Self {
        Self { allowed: true }
    }

    pub fn deny() -> Self {
        Self { allowed: false }
    }
}

impl AccessGate for StaticGate {
    fn check(&self) -> bool {
        self.allowed
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct MysqlConnection;

impl Connection for MysqlConnection {
    fn connect(&self) -> Result<()> {
        tracing::info!("mysql connection established");
        Ok(())
    }
}

/// Depends on the `Connection` capability, not on any concrete backend.
/// Swapping MySQL for anything else is a construction-site change only.
pub struct PasswordReminder<C: Connection> {
    connection: C,
}

impl<C: Connection> PasswordReminder<C> {
    pub fn new(connection: C) -> Self {
        Self { connection }
    }

    pub fn send(&self, user: &str) -> Result<String> {
        self.connection.connect()?;
        Ok(format!("Password reminder queued for {}", user))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::KitError;
    use std::cell::Cell;

    #[derive(Default)]
    struct FakeConnection {
        connects: Cell<usize>,
    }

    impl Connection for &FakeConnection {
        fn connect(&self) -> Result<()> {
            self.connects.set(self.connects.get() + 1);
            Ok(())
        }
    }

    struct DeadConnection;

    impl Connection for DeadConnection {
        fn connect(&self) -> Result<()> {
            Err(KitError::RepositoryError {
                message: "connection refused".to_string(),
            })
        }
    }

    #[test]
    fn reminder_connects_exactly_once_per_send() {
        let fake = FakeConnection::default();
        let reminder = PasswordReminder::new(&fake);

        let message = reminder.send("nahid").unwrap();
        assert_eq!(message, "Password reminder queued for nahid");
        assert_eq!(fake.connects.get(), 1);
    }

    #[test]
    fn connection_failure_propagates() {
        let reminder = PasswordReminder::new(DeadConnection);
        assert!(reminder.send("nahid").is_err());
    }

    #[test]
    fn reminder_accepts_the_mysql_adapter() {
        let reminder = PasswordReminder::new(MysqlConnection);
        assert!(reminder.send("nahid").is_ok());
    }

    #[test]
    fn gate_answers_match_construction() {
        assert!(StaticGate::allow().check());
        assert!(!StaticGate::deny().check());
    }
}
