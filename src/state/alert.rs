//! Visibility of a dismissible banner.

#[cfg(test)]
#[path = "alert_test.rs"]
mod alert_test;

/// Starts visible; once dismissed it stays hidden for the instance lifetime.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AlertState {
    visible: bool,
}

impl Default for AlertState {
    fn default() -> Self {
        Self { visible: true }
    }
}

impl AlertState {
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Hide the banner. Idempotent.
    pub fn dismiss(&mut self) {
        self.visible = false;
    }
}
