use super::*;

fn sample() -> Config {
    Config::new("https://demo.supabase.co", "anon-key")
}

// =============================================================
// Construction
// =============================================================

#[test]
fn new_trims_trailing_slashes_from_the_url() {
    let config = Config::new("https://demo.supabase.co/", "k");
    assert_eq!(config.url, "https://demo.supabase.co");
}

// =============================================================
// Endpoint builders
// =============================================================

#[test]
fn bookmarks_endpoint_targets_the_table_route() {
    assert_eq!(
        sample().bookmarks_endpoint(),
        "https://demo.supabase.co/rest/v1/bookmarks"
    );
}

#[test]
fn auth_endpoint_formats_expected_routes() {
    assert_eq!(
        sample().auth_endpoint("user"),
        "https://demo.supabase.co/auth/v1/user"
    );
    assert_eq!(
        sample().auth_endpoint("logout"),
        "https://demo.supabase.co/auth/v1/logout"
    );
}

#[test]
fn realtime_endpoint_swaps_https_for_wss() {
    assert_eq!(
        sample().realtime_endpoint(),
        "wss://demo.supabase.co/realtime/v1/websocket?apikey=anon-key&vsn=1.0.0"
    );
}

#[test]
fn realtime_endpoint_swaps_http_for_ws() {
    let config = Config::new("http://localhost:54321", "local");
    assert_eq!(
        config.realtime_endpoint(),
        "ws://localhost:54321/realtime/v1/websocket?apikey=local&vsn=1.0.0"
    );
}
