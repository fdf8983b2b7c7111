use super::*;

#[test]
fn config_from_build_vars() {
    let config = config_from(|key| match key {
        "SUPABASE_URL" => Some("https://xyz.supabase.co/"),
        "SUPABASE_ANON_KEY" => Some("anon"),
        "LINKBIO_AVATAR_BUCKET" => Some("pics"),
        _ => None,
    })
    .unwrap();

    assert_eq!(config.supabase_url, "https://xyz.supabase.co");
    assert_eq!(config.avatar_bucket, "pics");
    assert_eq!(config.profiles_table, "profiles");
}

#[test]
fn missing_build_vars_are_reported() {
    let err = config_from(|_| None).unwrap_err();
    assert_eq!(err, ConfigError::Missing { var: "SUPABASE_URL" });
}
