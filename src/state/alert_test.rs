use super::*;

#[test]
fn alert_starts_visible() {
    assert!(AlertState::default().is_visible());
}

#[test]
fn dismiss_hides_alert() {
    let mut alert = AlertState::default();
    alert.dismiss();
    assert!(!alert.is_visible());
}

#[test]
fn dismiss_twice_is_harmless() {
    let mut alert = AlertState::default();
    alert.dismiss();
    alert.dismiss();
    assert!(!alert.is_visible());
}
