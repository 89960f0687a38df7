//! Property tests for the validation ladder and counting.

mod common;

use common::{console, create, exec};
use hbnb_storage::Storage;
use hbnb_types::ClassName;
use proptest::prelude::*;

fn unknown_class() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z0-9_]{0,15}".prop_filter("must not be a known class", |name| {
        ClassName::lookup(name).is_none()
    })
}

proptest! {
    #[test]
    fn unknown_classes_are_rejected_without_mutation(name in unknown_class()) {
        let mut c = console();
        let id = create(&mut c, ClassName::User);
        let before = c.storage().all().clone();

        for line in [
            format!("create {name}"),
            format!("count {name}"),
            format!("show {name} {id}"),
            format!("destroy {name} {id}"),
            format!("update {name} {id} name x"),
            format!("all {name}"),
        ] {
            prop_assert_eq!(exec(&mut c, &line), "** class doesn't exist **\n");
        }
        prop_assert_eq!(c.storage().all(), &before);
    }

    #[test]
    fn absent_ids_are_not_found(idx in 0usize..7, id in "[a-z0-9-]{1,36}") {
        let mut c = console();
        let class = ClassName::ALL[idx];
        for verb in ["show", "destroy"] {
            prop_assert_eq!(
                exec(&mut c, &format!("{verb} {class} {id}")),
                "** no instance found **\n"
            );
        }
        prop_assert_eq!(
            exec(&mut c, &format!("update {class} {id} name x")),
            "** no instance found **\n"
        );
    }

    #[test]
    fn count_matches_created_records(counts in prop::collection::vec(0usize..4, 7)) {
        let mut c = console();
        for (class, n) in ClassName::ALL.iter().zip(&counts) {
            for _ in 0..*n {
                create(&mut c, *class);
            }
        }
        for (class, n) in ClassName::ALL.iter().zip(&counts) {
            prop_assert_eq!(exec(&mut c, &format!("count {class}")), format!("{n}\n"));
            prop_assert_eq!(
                exec(&mut c, &format!("{class}.count()")),
                format!("{n}\n")
            );
        }
    }
}
