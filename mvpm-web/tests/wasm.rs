#![cfg(target_arch = "wasm32")]
//! Browser-only checks for the service layer.
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn device_opt_out_defaults_to_false() {
    assert!(!mvpm_web::services::flags::device_opt_out());
}

#[wasm_bindgen_test]
fn browser_clock_yields_an_iso_timestamp() {
    let stamp = mvpm_web::services::analytics::now_iso();
    assert!(stamp.contains('T'), "unexpected timestamp: {stamp}");
    assert!(stamp.ends_with('Z'));
}

#[wasm_bindgen_test]
fn remote_flags_have_no_opinion_without_the_provider_script() {
    use mvpm_game::flags::RemoteFlags;
    let provider = mvpm_web::services::flags::PosthogFlags;
    assert_eq!(provider.is_feature_enabled("mvpm_games_chart_in_10"), None);
}
