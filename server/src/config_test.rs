use super::*;

fn lookup_from<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
    move |key| {
        pairs
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| (*v).to_owned())
    }
}

#[test]
fn empty_environment_yields_defaults() {
    let config = Config::from_lookup(|_| None);
    assert_eq!(config.port, DEFAULT_PORT);
    assert_eq!(config.site_dir, PathBuf::from("site"));
    assert_eq!(config.data_dir, PathBuf::from("data"));
}

#[test]
fn explicit_values_override_defaults() {
    let env = [("PORT", "3000"), ("SITE_DIR", "/srv/site"), ("DATA_DIR", "/srv/data")];
    let config = Config::from_lookup(lookup_from(&env));
    assert_eq!(config.port, 3000);
    assert_eq!(config.site_dir, PathBuf::from("/srv/site"));
    assert_eq!(config.data_dir, PathBuf::from("/srv/data"));
}

#[test]
fn unparseable_port_falls_back() {
    let env = [("PORT", "not-a-port")];
    let config = Config::from_lookup(lookup_from(&env));
    assert_eq!(config.port, DEFAULT_PORT);
}
