use super::*;

#[test]
fn replaces_separators() {
    assert_eq!(sanitize_identifier("a b.c-d&e", "sites"), "a_b_c_d_e");
}

#[test]
fn strips_delimiters() {
    assert_eq!(sanitize_identifier("{{site_1}}", "sites"), "site_1");
    assert_eq!(sanitize_identifier("{{ site_1_element_1 }}", "sites"), "site_1_element_1");
    assert_eq!(sanitize_identifier("{{site_1}}.address", "sites"), "site_1_address");
}

#[test]
fn strips_sites_prefix() {
    assert_eq!(sanitize_identifier("sites.name", "sites"), "name");
    assert_eq!(sanitize_identifier(".sites.name", "sites"), "name");
    assert_eq!(sanitize_identifier("sites", "sites"), "");
    assert_eq!(sanitize_identifier(".sites", "sites"), "");
}

#[test]
fn keeps_keys_that_only_start_like_sites() {
    assert_eq!(sanitize_identifier("sitesfoo.bar", "sites"), "sitesfoo_bar");
    assert_eq!(sanitize_identifier(".sitemap", "sites"), "_sitemap");
}

#[test]
fn custom_sites_key() {
    assert_eq!(sanitize_identifier("sites v4.7.name", "sites v4.7"), "name");
}

#[test]
fn lossy_collision() {
    assert_eq!(sanitize_identifier("a-b", "sites"), sanitize_identifier("a b", "sites"));
}

#[test]
fn placeholder_round_trip() {
    let token = placeholder("site_1_hostname");
    assert_eq!(token, "{{site_1_hostname}}");
    assert_eq!(placeholder_identifier(&token), Some("site_1_hostname"));
    assert_eq!(placeholder_identifier("{{ padded }}"), Some("padded"));
}

#[test]
fn placeholder_identifier_rejects_partial() {
    assert_eq!(placeholder_identifier("prefix {{x}}"), None);
    assert_eq!(placeholder_identifier("{{a}} {{b}}"), None);
    assert_eq!(placeholder_identifier("{{}}"), None);
    assert_eq!(placeholder_identifier("plain"), None);
}
