//! Hex and timestamp adapters on top of the numeric codec.

use std::error::Error;

use hashids::{Hashids, Input};
use test_case::test_case;
use time::macros::datetime;
use time::OffsetDateTime;

fn hashids(salt: &str, min_length: usize) -> Hashids {
    Hashids::builder()
        .salt(salt)
        .min_length(min_length)
        .build()
        .expect("default alphabet is valid")
}

#[test_case("1", "test salt", 6, "gz41PV"; "single digit")]
#[test_case("1", "test salt", 18, "O35oKBgz41PVdL9MQA"; "single digit padded")]
#[test_case("1a", "test salt", 18, "XBe7QdP7Wh5PMa8Ojy"; "two digits")]
#[test_case("2", "test salt", 18, "9VbdrOYnAYnxDlLEWj"; "another digit")]
#[test_case("111aff", "test salt", 18, "5JqQ5h6hYhjCyhgqjL"; "six digits")]
#[test_case("abcdef123456", "test salt", 8, "GLC6SKuxIZfQh6hatOc4FKsj"; "longer than min")]
#[test_case("deadbeef", "test salt", 40, "vk9bLlGDRWVzyXIkflC6IbSGfyfvqBM7m8wj04KX"; "deadbeef")]
#[test_case("507f1f77bcf86cd799439011", "some salt", 40, "DnSntKI1U4UeUNIlIVHEfAUlcpCqfqs4Izu1uAi5FJuVteUO"; "object id")]
#[test_case("f00000fddddddeeeee4444444ababab", "test salt", 30, "4bhkf1f9fmf4fDheI4IKI7I0I3IQfyfdfefVf4FmF3F5FXFbFgFYC0SZCASOCk"; "repeated digits")]
#[test_case("abcdef123456abcdef123456abcdef123456", "", 0, "RyTwU6cqfjhMipi3sAtOuZCmFkT4UGcLfrhlijiYsVtAupCgFpT0UZcvfQhOi4iys9tjuLCz"; "no salt")]
#[test_case("f000000000000000000000000000000000000000000000000000f", "my test", 40, "0yfzcOcJcecgcQc5cbcGc5cEcKcyc0cLcQc0cBcrcMcvcpcGcdcacpcJcacdcGclc8cjcKcVcacmczcNcpcdcWcecocYcecMcqc5cBcXc4"; "long zeros")]
#[test_case("fffffffffffffffffffffffffffffffffffffffffffffffffffff", "salt", 20, "PNUXUBU2UKUNUPUYU0U2UbU6UaUNUXUOUoUqU4UwUgUDUPU6UoUYUEULUrUoU9U2UXUGUbUeUgU2UQUKUMUnUbUjUEULUAUGUxUZU9UOUY"; "long fs")]
fn test_hex(hex: &str, salt: &str, min_length: usize, expected: &str) -> Result<(), Box<dyn Error>> {
    let hashids = hashids(salt, min_length);

    let hash = hashids.encode_hex(hex)?;
    assert_eq!(hash, expected);
    assert_eq!(hashids.decode(&hash)?.to_hex()?, hex);

    Ok(())
}

#[test]
fn test_uppercase_hex_decodes_lowercased() -> Result<(), Box<dyn Error>> {
    let hashids = hashids("my salt", 10);

    let hash = hashids.encode_input(Input::Hex("ABCDDD6666DDEEEEEEEEE"))?;
    assert_eq!(hash, "WksrIAioSYSlSQCWCMCJCESoSXHoHpHbHrHaH9H6Hn");
    assert_eq!(hashids.decode(&hash)?.to_hex()?, "abcddd6666ddeeeeeeeee");

    Ok(())
}

#[test]
fn test_invalid_hex_is_rejected() {
    assert!(hashids("test salt", 8).encode_hex("xyz").is_err());
    assert!(hashids("test salt", 8).encode_hex("").is_err());
}

#[test_case(datetime!(2024-02-29 13:37:00.123456789 UTC), "test salt", 40; "leap day")]
#[test_case(datetime!(1970-01-01 00:00 UTC), "test salt", 8; "epoch")]
#[test_case(datetime!(2019-06-01 08:00 +05:00), "my salt", 10; "with offset")]
#[test_case(datetime!(2500-12-31 23:59:59.999999999 UTC), "test salt", 30; "far future")]
fn test_time_round_trips(time: OffsetDateTime, salt: &str, min_length: usize) -> Result<(), Box<dyn Error>> {
    let hashids = hashids(salt, min_length);

    let hash = hashids.encode_time(time)?;
    let decoded = hashids.decode(&hash)?.to_time()?;

    assert_eq!(decoded, time);
    assert_eq!((time - decoded).whole_nanoseconds(), 0);

    Ok(())
}

#[test]
fn test_time_decode_needs_a_single_number() {
    let hashids = hashids("test salt", 8);
    let hash = hashids.encode(&[1, 2]).unwrap();

    assert!(hashids.decode(&hash).unwrap().to_time().is_err());
}
