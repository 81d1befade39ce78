use vimdrill::theme::{builtin_theme_names, get_builtin_theme};

#[test]
fn test_builtin_themes_load() {
    for name in builtin_theme_names() {
        let theme = get_builtin_theme(name).expect("builtin theme should load");
        assert_eq!(&theme.name, name);
    }
}

#[test]
fn test_unknown_theme_returns_none() {
    assert!(get_builtin_theme("no-such-theme").is_none());
    assert!(get_builtin_theme("").is_none());
}

#[test]
fn test_dark_and_light_palettes_differ() {
    let dark = get_builtin_theme("default-dark").unwrap();
    let light = get_builtin_theme("default-light").unwrap();
    assert_ne!(
        format!("{:?}", dark.colors.background),
        format!("{:?}", light.colors.background)
    );
}
