use hbnb_types::{ClassName, Error};
use proptest::prelude::*;

#[test]
fn every_known_class_round_trips_through_its_name() {
    for class in ClassName::ALL {
        assert_eq!(class.as_str().parse::<ClassName>(), Ok(class));
        assert_eq!(class.to_string(), class.as_str());
    }
}

#[test]
fn known_set_has_seven_classes() {
    let names: Vec<&str> = ClassName::ALL.iter().map(ClassName::as_str).collect();
    assert_eq!(
        names,
        ["BaseModel", "User", "Amenity", "City", "Review", "Place", "State"]
    );
}

#[test]
fn lookup_is_case_sensitive() {
    assert_eq!(ClassName::lookup("user"), None);
    assert_eq!(ClassName::lookup("USER"), None);
    assert_eq!(ClassName::lookup("User"), Some(ClassName::User));
}

#[test]
fn unknown_class_is_rejected() {
    assert_eq!(
        "MyModel".parse::<ClassName>(),
        Err(Error::UnknownClass("MyModel".into()))
    );
    assert!("".parse::<ClassName>().is_err());
}

#[test]
fn key_prefix_ends_with_dot() {
    assert_eq!(ClassName::Place.key_prefix(), "Place.");
}

#[test]
fn converts_into_owned_name() {
    assert_eq!(String::from(ClassName::Review), "Review");
}

proptest! {
    #[test]
    fn lowercase_names_never_match(idx in 0usize..7) {
        let name = ClassName::ALL[idx].as_str().to_lowercase();
        prop_assert!(ClassName::lookup(&name).is_none());
    }

    #[test]
    fn arbitrary_identifiers_outside_the_set_are_unknown(name in "[a-z_][a-z0-9_]{0,12}") {
        prop_assert!(name.parse::<ClassName>().is_err());
    }
}
