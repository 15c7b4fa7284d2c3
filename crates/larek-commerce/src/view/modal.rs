//! Dialog open/close lifecycle.

use tracing::trace;

/// Where a click landed while a dialog was open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// The dimmed area around the dialog.
    Overlay,
    /// The dialog's close button.
    CloseButton,
    /// Anywhere inside the dialog content.
    Content,
}

/// Open/closed state of one dialog, composed into each concrete view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Modal {
    name: &'static str,
    open: bool,
}

impl Modal {
    pub fn new(name: &'static str) -> Self {
        Self { name, open: false }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn open(&mut self) {
        trace!(modal = self.name, "open");
        self.open = true;
    }

    pub fn close(&mut self) {
        trace!(modal = self.name, "close");
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Whether a click on `target` should dismiss the open dialog.
    pub fn dismisses(&self, target: ClickTarget) -> bool {
        self.open && target != ClickTarget::Content
    }

    /// Route a click; returns whether the dialog closed.
    pub fn handle_click(&mut self, target: ClickTarget) -> bool {
        if !self.dismisses(target) {
            return false;
        }
        self.close();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_close() {
        let mut modal = Modal::new("basket");
        assert!(!modal.is_open());
        modal.open();
        assert!(modal.is_open());
        modal.close();
        assert!(!modal.is_open());
    }

    #[test]
    fn test_outside_click_closes() {
        let mut modal = Modal::new("payment");
        modal.open();

        assert!(!modal.handle_click(ClickTarget::Content));
        assert!(modal.is_open());

        assert!(modal.handle_click(ClickTarget::Overlay));
        assert!(!modal.is_open());

        assert!(!modal.handle_click(ClickTarget::Overlay));
    }
}
