#![no_main]
use libfuzzer_sys::fuzz_target;
use long_proto::schema::Root;

fuzz_target!(|data: &[u8]| {
    if let Ok(root) = long_proto::decode::<Root>(data) {
        // Whatever decodes must survive a second trip unchanged.
        let again: Root = long_proto::decode(&long_proto::encode(&root)).unwrap();
        assert_eq!(again, root);
    }
});
