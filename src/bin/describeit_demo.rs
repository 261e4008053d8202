// Reference scenario: an `Integer` description and a `Test` description covering every
// outcome. Usage: cargo run --bin describeit-demo -- [--format behave|pretty|json]

use std::ops::{Add, Mul, Sub};

use describeit::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq)]
struct Integer {
    value: i32,
}

impl From<i32> for Integer {
    fn from(value: i32) -> Self {
        Self { value }
    }
}

impl PartialEq<i32> for Integer {
    fn eq(&self, other: &i32) -> bool {
        self.value == *other
    }
}

impl Add for Integer {
    type Output = Integer;

    fn add(self, other: Integer) -> Integer {
        Integer::from(self.value + other.value)
    }
}

// Deliberately wrong so that "should handle subtraction" fails.
impl Sub for Integer {
    type Output = Integer;

    fn sub(self, other: Integer) -> Integer {
        Integer::from(self.value + other.value)
    }
}

impl Mul for Integer {
    type Output = Integer;

    fn mul(self, other: Integer) -> Integer {
        Integer::from(self.value * other.value)
    }
}

#[derive(Debug, thiserror::Error)]
#[error("custom error raised")]
struct CustomError;

struct Raiser;

impl Raiser {
    fn raise_custom(&self) -> Result<(), CustomError> {
        Err(CustomError)
    }

    fn raise_standard(&self) -> Result<i32, std::num::ParseIntError> {
        "not a number".parse::<i32>()
    }
}

describe! {
    fn integer("Integer") {
        it "should handle addition" {
            let c = Integer::from(1000) + Integer::from(337);
            expect(c).equals(1337)?;
        }
        it "should handle subtraction" {
            let c = Integer::from(1337) - Integer::from(337);
            expect(c).equals(1000)?;
        }
        it "passes multiplication" {
            let c = Integer::from(3) * Integer::from(2);
            expect(c).equals(6)?;
        }
    }
}

describe! {
    fn test_cases("Test") {
        it "should raise custom exception" {
            Raiser.raise_custom()?;
        }
        it "should raise standard exception" {
            Raiser.raise_standard()?;
        }
        it "should fail in expect" {
            expect(2).equals(3)?;
        }
        it "should catch custom exception in expect_exception" {
            expect_error!(Raiser.raise_custom(), CustomError)?;
        }
        it "should not catch custom exception in expect_exception with std::exception" {
            expect_error!(Raiser.raise_custom(), std::io::Error)?;
        }
    }
}

describeit_main!(test_cases, integer);
