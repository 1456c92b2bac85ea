use docstudy::presentation::config::Environment;

#[test]
fn given_known_names_when_parsing_environment_then_aliases_accepted() {
    assert_eq!(Environment::try_from("dev".to_string()), Ok(Environment::Local));
    assert_eq!(Environment::try_from(" Production ".to_string()), Ok(Environment::Prod));
    assert_eq!(Environment::try_from("TEST".to_string()), Ok(Environment::Test));
}

#[test]
fn given_unknown_name_when_parsing_environment_then_error_names_it() {
    let error = Environment::try_from("staging".to_string()).unwrap_err();

    assert!(error.contains("staging"));
}

#[test]
fn given_environment_when_naming_settings_file_then_lowercase_profile_suffix() {
    assert_eq!(Environment::Prod.to_string(), "Prod");
    assert_eq!(Environment::Prod.settings_file(), "appsettings.prod");
    assert_eq!(Environment::default(), Environment::Local);
}

#[test]
fn given_str_when_parsing_environment_then_from_str_agrees_with_try_from() {
    assert_eq!("local".parse::<Environment>(), Ok(Environment::Local));
}
