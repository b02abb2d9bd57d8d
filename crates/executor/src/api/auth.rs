//! Account and permission administration.

use crate::{AuthIntent, Command, Connection, Output, Result, Session};

impl<C: Connection> Session<C> {
    /// Send an account intent built with [`Account`](crate::Account).
    ///
    /// Permission reads and writes that target the logged-in user are sent
    /// in their short form; for anyone else the target user is named. Both
    /// need a prior successful [`login`](Session::login).
    ///
    /// # Example
    ///
    /// ```ignore
    /// let theo = Account::new("theo");
    /// session.auth(&theo.create("paris"))?;
    /// session.auth(&theo.promote())?;
    /// ```
    pub fn auth(&self, intent: &AuthIntent) -> Result<Output> {
        self.execute(Command::Auth(intent.clone()))
    }
}
