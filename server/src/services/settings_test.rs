use super::*;

#[test]
fn defaults_are_pkr_with_disconnected_integrations() {
    let settings = default_settings();
    assert_eq!(settings.currency, "PKR");
    assert_eq!(settings.branding.dashboard_name, "Bambly");
    assert!(settings.connections.iter().all(|c| !c.connected));
}

#[test]
fn empty_update_changes_nothing() {
    let before = default_settings();
    let after = apply_update(before.clone(), SettingsUpdate::default());
    assert_eq!(before, after);
}

#[test]
fn update_replaces_only_the_set_fields() {
    let update = SettingsUpdate {
        currency: Some("USD".to_owned()),
        sync_interval: Some(15),
        ..SettingsUpdate::default()
    };
    let after = apply_update(default_settings(), update);
    assert_eq!(after.currency, "USD");
    assert_eq!(after.sync_interval, 15);
    // Untouched fields keep their stored values.
    assert_eq!(after.data_retention, 90);
    assert_eq!(after.branding.dashboard_name, "Bambly");
}

#[test]
fn branding_updates_as_a_unit() {
    let branding = BrandingData {
        dashboard_name: "LUMU".to_owned(),
        tagline: "Growth analytics".to_owned(),
        logo_url: "/lumu.svg".to_owned(),
        primary_color: "#10b981".to_owned(),
    };
    let update = SettingsUpdate { branding: Some(branding.clone()), ..SettingsUpdate::default() };
    let after = apply_update(default_settings(), update);
    assert_eq!(after.branding, branding);
    assert_eq!(after.currency, "PKR");
}
