//! Class factory: builds a fresh record from a class name.

use hbnb_types::ClassName;

use crate::Record;

/// Function producing a new, unsaved record of one class.
pub type Constructor = fn() -> Record;

/// Returns the constructor registered for `class`.
pub fn constructor(class: ClassName) -> Constructor {
    match class {
        ClassName::BaseModel => base_model,
        ClassName::User => user,
        ClassName::Amenity => amenity,
        ClassName::City => city,
        ClassName::Review => review,
        ClassName::Place => place,
        ClassName::State => state,
    }
}

/// Constructs a new record of `class` with a fresh id.
pub fn construct(class: ClassName) -> Record {
    constructor(class)()
}

fn base_model() -> Record {
    Record::new(ClassName::BaseModel)
}

fn user() -> Record {
    Record::new(ClassName::User)
}

fn amenity() -> Record {
    Record::new(ClassName::Amenity)
}

fn city() -> Record {
    Record::new(ClassName::City)
}

fn review() -> Record {
    Record::new(ClassName::Review)
}

fn place() -> Record {
    Record::new(ClassName::Place)
}

fn state() -> Record {
    Record::new(ClassName::State)
}
