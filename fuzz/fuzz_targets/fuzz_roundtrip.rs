#![no_main]
use arbitrary::Arbitrary;
use jspath::{Path, PathComponent};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
enum Component {
    Key(String),
    Index(i64),
}

fuzz_target!(|components: Vec<Component>| {
    let path: Path = components
        .into_iter()
        .map(|c| match c {
            Component::Key(k) => PathComponent::from(k),
            Component::Index(i) => PathComponent::from(i),
        })
        .collect();

    let js = path.to_js();
    assert_eq!(Path::from_js(&js).as_ref(), Ok(&path), "{js}");

    let json = path.to_json();
    assert_eq!(json, serde_json::to_string(&path).unwrap());
    assert_eq!(Path::from_json(&json).unwrap(), path);
});
