//! Declaration surface.
//!
//! [`describe!`](crate::describe) turns a block of `it` cases into a registration
//! function with the [`Declaration`](crate::Declaration) signature. Nothing registers
//! itself: the functions are collected explicitly, either with
//! [`Registry::declare_all`](crate::Registry::declare_all) or through
//! [`describeit_main!`](crate::describeit_main).
//!
//! ```rust
//! use describeit::prelude::*;
//!
//! #[derive(Default)]
//! struct Stack(Vec<i32>);
//!
//! impl Description for Stack {
//!     fn before_each(&mut self) {
//!         self.0.push(1);
//!     }
//! }
//!
//! describe! {
//!     /// Stack behaviour.
//!     pub fn stack("Stack") with Stack {
//!         it "starts with the seeded element" |stack| {
//!             expect(stack.0.len()).equals(1)?;
//!         }
//!         it "grows on push" |stack| {
//!             stack.0.push(2);
//!             expect(stack.0.len()).greater_than(1)?;
//!         }
//!         it "needs no state" {
//!             expect(true).equals(true)?;
//!         }
//!     }
//! }
//!
//! let mut registry = Registry::new();
//! stack(&mut registry).unwrap();
//! assert_eq!(registry.descriptions_count(), 1);
//! ```
//!
//! Test bodies may use `?` on any error; the macro appends the final `Ok(())`.

/// Declares a description and generates its registration function.
///
/// `describe! { pub fn name("Description") { it "test" { ... } } }` uses `()` as state;
/// `with State` uses a [`Description`](crate::Description) type, reachable in each test
/// through an optional `|binding|` after the test name.
#[macro_export]
macro_rules! describe {
    (
        $(#[$meta:meta])*
        $vis:vis fn $register:ident ($name:expr) with $state:ty {
            $( it $test:literal $(| $binding:ident |)? $body:block )*
        }
    ) => {
        $(#[$meta])*
        $vis fn $register(
            registry: &mut $crate::Registry,
        ) -> ::std::result::Result<(), $crate::DescribeError> {
            #[allow(unused_mut)]
            let mut registrar = $crate::DescriptionRegistrar::<$state>::new($name);
            $(
                registrar.register_method(
                    $test,
                    $crate::next_order_key(),
                    $crate::__describe_body!($state; $($binding)?; $body),
                );
            )*
            registry.register_describe(registrar)
        }
    };
    (
        $(#[$meta:meta])*
        $vis:vis fn $register:ident ($name:expr) {
            $($tests:tt)*
        }
    ) => {
        $crate::describe! {
            $(#[$meta])*
            $vis fn $register($name) with () {
                $($tests)*
            }
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __describe_body {
    ($state:ty; $binding:ident; $body:block) => {
        |$binding: &mut $state| -> $crate::TestResult {
            $body;
            ::std::result::Result::Ok(())
        }
    };
    ($state:ty; ; $body:block) => {
        |_: &mut $state| -> $crate::TestResult {
            $body;
            ::std::result::Result::Ok(())
        }
    };
}

/// Generates a `main` that collects the given declarations into the process-wide
/// registry and runs them with the command-line driver.
///
/// ```rust,no_run
/// use describeit::prelude::*;
///
/// describe! {
///     fn math("Math") {
///         it "adds" { expect(2 + 2).equals(4)?; }
///     }
/// }
///
/// describeit_main!(math);
/// ```
#[macro_export]
macro_rules! describeit_main {
    ($($declaration:path),* $(,)?) => {
        fn main() -> ::std::process::ExitCode {
            $crate::cli::run_main(&[$($declaration as $crate::Declaration),*])
        }
    };
}
