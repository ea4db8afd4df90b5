//! Known hashes that must never change, since previously issued hashes
//! depend on them.

use assert_matches::assert_matches;
use hashids::{DecodeError, Hashids};
use test_case::test_case;

fn hashids(salt: &str, min_length: usize) -> Hashids {
    Hashids::builder()
        .salt(salt)
        .min_length(min_length)
        .build()
        .expect("default alphabet is valid")
}

#[test_case(&[45, 434, 1313, 99], "this is my salt", 8, "7nnhzEsDkiYa"; "four numbers")]
#[test_case(&[45, 434, 1313, 99], "this is my salt", 16, "nG7nnhzEsDkiYadK"; "four numbers padded")]
#[test_case(&[1], "this is my salt", 4, "0NV0"; "one, length 4")]
#[test_case(&[1], "this is my salt", 6, "B0NV05"; "one, length 6")]
#[test_case(&[1], "this is my salt", 8, "gB0NV05e"; "one, length 8")]
#[test_case(&[1], "this is my salt", 14, "EDngB0NV05ev1W"; "one, length 14")]
#[test_case(&[1], "this is my salt", 16, "JEDngB0NV05ev1Ww"; "one, length 16")]
#[test_case(&[1], "this is another salt", 6, "QGQ707"; "one, another salt")]
#[test_case(&[1], "this is another salt", 16, "b9qVeQGQ707ay8Kl"; "one, another salt padded")]
#[test_case(&[2], "this is my salt", 8, "yLA6m0oM"; "two")]
#[test_case(&[1000], "this is my salt", 10, "Xzjd5vJGvO"; "thousand")]
#[test_case(&[1, 10, 1000], "this is my salt", 10, "40rlHmFyQd"; "three numbers")]
#[test_case(&[1, 10, 1000], "this is another salt", 10, "303gcXFo60"; "three numbers, another salt")]
#[test_case(&[2, 24, 234567810], "test salt", 12, "nG2fJTDWGebV"; "large number")]
#[test_case(&[2, 24, 234567810], "another test salt", 12, "w9XIviZljBvY"; "large number, another salt")]
#[test_case(&[2, 24, 234567810], "test salt", 20, "rBwGnG2fJTDWGebVP24d"; "large number padded")]
#[test_case(&[29, 30, 26, 29, 27, 30, 30, 31], "test salt", 30, "lGDRWVzyXIkflC6IbSGfyfvqBM7m8w"; "eight numbers")]
fn test_encode_decode(numbers: &[u64], salt: &str, min_length: usize, expected: &str) {
    let hashids = hashids(salt, min_length);

    let hash = hashids.encode(numbers).unwrap();
    assert_eq!(hash, expected);

    let decoded = hashids.decode(&hash).unwrap();
    assert_eq!(decoded.as_slice(), numbers);
}

#[test_case(&[1], 8; "one")]
#[test_case(&[10], 16; "ten")]
#[test_case(&[10, 23, 56], 22; "three numbers, 22")]
#[test_case(&[10, 23, 56], 36; "three numbers, 36")]
fn test_min_length_padding_is_exact(numbers: &[u64], min_length: usize) {
    let hashids = hashids("test salt", min_length);

    let hash = hashids.encode(numbers).unwrap();
    assert_eq!(hash.chars().count(), min_length);
    assert_eq!(hashids.decode(&hash).unwrap().as_slice(), numbers);
}

#[test]
fn test_many_padding_rounds() {
    let hashids = hashids("my test salt", 999);
    let numbers = [1000000001, 1000000002, 1000000003, 1000000004, 1000000005];

    let hash = hashids.encode(&numbers).unwrap();
    assert_eq!(hash.chars().count(), 999);
    assert_eq!(hash, LONG_HASH);
    assert_eq!(hashids.decode(&hash).unwrap().as_slice(), &numbers);
}

#[rustfmt::skip]
const LONG_HASH: &str = "jOAab4REXGWr37ZKwoYMK758XDaxjkYv9Zb4VnWJ0ak5EnoY6JR8WDXPlpOZr7dr2bdevMmX9PjBow6EKVkR5EBr8QlA3bapo12ZX7GML5JMX0VDrGxRoYWjLbk25ePnAnYRdl5KAPLbZ6Qj9rxX48VOJxZwa5oX0jekKv2bQqYALbnpG2190mlExMZqj4RwoBe9YdAElDROnP0w2xJ1pGLQBMeRYVWGp4KXDQlvOb0mEBP69kdoDm7ZrEjKM2ABJYRqV1MwnRO76bJoYBG4eQ5P0EZrlKQbV08Zvxp97o3GPOAXYOxEnAMmXDKqRPvlwL4WakbVOlLPQBqo8DZKG6nkx7e3RkL3R9m4wJbQDOWd1a0jY65GDKEqMxp54wdYLrn7mVlR9e5BMOobw4Zv6dYQaPq78VRG2paRklKJ5rqPXb3vZLVY0PLKEqnd6VxA8ZbYJB7Oa95OPWdaYvn5R479q3V8AorxlN7VoaAn8TpLraRecE0n43nfYERBkoCBJ3L80zeG1wbB0LEQ6mjMJ2KpZXkDGlmj41okRDXwe0MWrvQp3287WdwnOM9EmQjo61DxBA4epJx2LmXAG9rE103KjDlknWejak0o2QW31bP8XOAvZB6JMxElA7GVoerXZnPpB8qv2K5vd2a0A1mjwp4rW9YXMEbJZJ5e31V9Y0B87odpG26rQjeda1kj2JE4wqD6WnBRm5LMVrLadx9mv8A2KkX3WjplDq3w5epl0vQaLbWG41POxX8nknjo1w87A392dra5ZJqx6LvMZqj46kom87XKra5WbV3eYX6Qa3Lrd7JPWVAvO8Kk5DVnW496mMpDPr18RlE7d3BGOa12Ep3wekBDMqm70voWGJ4w69BQZvlKOqE8dap3Jm17ked09jKVn6WOPqmDRwYx4vxZnOp0L73YDAJQl8q1GWa4mAq0Vwe1bx2GKjBMQv493LQ2wApd3lmr16GOoeLBPRqE5kpQdLV2DBxvnml86M9";

#[test]
fn test_hashes_with_a_different_salt_are_rejected() {
    let hash = hashids("this is my salt", 8).encode(&[45, 434, 1313, 99]).unwrap();
    assert_matches!(
        hashids("this is another salt", 8).decode(&hash),
        Err(DecodeError::IntegrityMismatch { .. })
    );
}
