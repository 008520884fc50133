#![no_main]

use libfuzzer_sys::fuzz_target;
use keyfmt::{KeyFormatError, KeySerializationEncryption, PrivateFormat};

fuzz_target!(|input: (u32, Option<u32>, &[u8])| {
    let (first, second, password) = input;

    let direct = KeySerializationEncryption::best_available(password);
    assert_eq!(direct.is_err(), password.is_empty());

    let Ok(builder) = PrivateFormat::OpenSSH.encryption_builder() else {
        return;
    };
    let Ok(builder) = builder.kdf_rounds(first) else {
        assert_eq!(first, 0);
        return;
    };
    if let Some(second) = second {
        assert_eq!(builder.kdf_rounds(second), Err(KeyFormatError::KdfRoundsAlreadySet));
    }
    match builder.build(password) {
        Ok(enc) => assert_eq!(enc.kdf_rounds(), Some(first)),
        Err(err) => assert_eq!(err, KeyFormatError::EmptyPassword),
    }
});
