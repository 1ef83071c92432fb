// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

use std::fmt;

use crate::error::{Error, Result};

pub(crate) const OPT_PREFIX: char = '-';

/// Used to specify whether an option is a "stand-alone" flag option
/// (needs no value), whether it accepts an optional argument, or
/// whether it requires an option argument.
///
/// This is never set by hand: it is derived from the signature of the
/// callback registered for the option (see [IntoArgHandler]).
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Need {
    /// Option is stand-alone (no argument accepted).
    Nothing,
    /// Option accepts an argument, but it may be omitted.
    OptionalArgument,
    /// Option needs an argument.
    Argument,
}

impl Default for Need {
    fn default() -> Self {
        Need::Nothing
    }
}

/// Conversion of a callback's return value into the parser's result.
///
/// Callbacks may return `()` (they can never fail) or
/// `Result<(), E>` for any displayable `E`. A failing callback stops the
/// parse and its error is returned as [Error::HandlerError].
pub trait IntoHandlerResult {
    /// Convert the callback return value.
    fn into_handler_result(self) -> Result<()>;
}

impl IntoHandlerResult for () {
    fn into_handler_result(self) -> Result<()> {
        Ok(())
    }
}

impl<E> IntoHandlerResult for std::result::Result<(), E>
where
    E: fmt::Display,
{
    fn into_handler_result(self) -> Result<()> {
        self.map_err(|e| Error::HandlerError(e.to_string()))
    }
}

/// A callback wrapped according to its shape.
///
/// The shape is fixed when the handler is created and determines both how
/// the parser looks ahead for an option argument ([ArgHandler::get_arg])
/// and how the callback is invoked ([ArgHandler::apply]).
pub enum ArgHandler<'a> {
    /// Callback taking no argument.
    Flag(Box<dyn FnMut() -> Result<()> + 'a>),
    /// Callback taking an argument that may be absent.
    Optional(Box<dyn FnMut(Option<String>) -> Result<()> + 'a>),
    /// Callback that must be given an argument.
    Mandatory(Box<dyn FnMut(String) -> Result<()> + 'a>),
}

impl<'a> ArgHandler<'a> {
    /// Create a handler for a flag option.
    pub fn flag<F, R>(mut f: F) -> Self
    where
        F: FnMut() -> R + 'a,
        R: IntoHandlerResult,
    {
        ArgHandler::Flag(Box::new(move || f().into_handler_result()))
    }

    /// Create a handler for an option whose argument may be omitted.
    pub fn optional<F, R>(mut f: F) -> Self
    where
        F: FnMut(Option<String>) -> R + 'a,
        R: IntoHandlerResult,
    {
        ArgHandler::Optional(Box::new(move |value| f(value).into_handler_result()))
    }

    /// Create a handler for an option that requires an argument.
    pub fn mandatory<F, R>(mut f: F) -> Self
    where
        F: FnMut(String) -> R + 'a,
        R: IntoHandlerResult,
    {
        ArgHandler::Mandatory(Box::new(move |value| f(value).into_handler_result()))
    }

    /// Returns the argument requirement of the handler.
    pub fn needs(&self) -> Need {
        match self {
            ArgHandler::Flag(_) => Need::Nothing,
            ArgHandler::Optional(_) => Need::OptionalArgument,
            ArgHandler::Mandatory(_) => Need::Argument,
        }
    }

    /// Decide whether `next`, the command-line argument following the
    /// option, is this option's argument.
    ///
    /// Returns the value to consume, or [None] if `next` must be left
    /// alone. This only looks at the form of `next`: it never consumes
    /// anything itself.
    ///
    /// - Flags never take the next argument.
    /// - Optional arguments are only taken if they do not look like an
    ///   option (do not start with a dash).
    /// - Mandatory arguments take whatever follows, dash or not, as `getopt(3)`
    ///   does.
    pub fn get_arg(&self, next: Option<&str>) -> Option<String> {
        match self {
            ArgHandler::Flag(_) => None,
            ArgHandler::Optional(_) => next
                .filter(|value| !value.starts_with(OPT_PREFIX))
                .map(String::from),
            ArgHandler::Mandatory(_) => next.map(String::from),
        }
    }

    /// Call the callback with the value chosen by [ArgHandler::get_arg].
    ///
    /// # Errors
    ///
    /// - [Error::MissingOptArg] if the handler needs an argument and `value`
    ///   is [None]. The callback is not called in this case.
    /// - [Error::HandlerError] if the callback itself fails.
    pub fn apply(&mut self, value: Option<String>) -> Result<()> {
        match self {
            ArgHandler::Flag(f) => f(),
            ArgHandler::Optional(f) => f(value),
            ArgHandler::Mandatory(f) => {
                let value = value.ok_or(Error::MissingOptArg)?;

                f(value)
            }
        }
    }
}

impl<'a> fmt::Debug for ArgHandler<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "ArgHandler::{:?}", self.needs())
    }
}

/// Marker for callbacks taking no argument.
#[derive(Debug)]
pub struct NoArg;

/// Marker for callbacks taking an `Option<String>`.
#[derive(Debug)]
pub struct OptionalArg;

/// Marker for callbacks taking a `String`.
#[derive(Debug)]
pub struct MandatoryArg;

/// Marker for an already constructed [ArgHandler].
#[derive(Debug)]
pub struct Explicit;

/// Anything that can be turned into an [ArgHandler].
///
/// The shape of the handler is chosen from the callback's own signature,
/// so plain functions and closures can be registered directly:
///
/// | Callback signature              | [Need]                   |
/// |---------------------------------|--------------------------|
/// | `FnMut() -> R`                  | [Need::Nothing]          |
/// | `FnMut(Option<String>) -> R`    | [Need::OptionalArgument] |
/// | `FnMut(String) -> R`            | [Need::Argument]         |
///
/// where `R` implements [IntoHandlerResult]. Closure parameters must be
/// annotated (`|value: String| ...`) so the signature is known.
///
/// The `Marker` type only exists to keep the implementations apart and is
/// normally inferred. Generic code can still name it:
///
/// ```rust
/// use cmdline_opts::{ArgHandler, IntoArgHandler, MandatoryArg, Need, NoArg};
///
/// fn wrap<'a, M, F: IntoArgHandler<'a, M>>(f: F) -> ArgHandler<'a> {
///     f.into_arg_handler()
/// }
///
/// let flag = wrap::<NoArg, _>(|| ());
/// let value = wrap::<MandatoryArg, _>(|_value: String| ());
///
/// assert_eq!(flag.needs(), Need::Nothing);
/// assert_eq!(value.needs(), Need::Argument);
/// ```
pub trait IntoArgHandler<'a, Marker> {
    /// Perform the conversion.
    fn into_arg_handler(self) -> ArgHandler<'a>;
}

impl<'a, F, R> IntoArgHandler<'a, NoArg> for F
where
    F: FnMut() -> R + 'a,
    R: IntoHandlerResult,
{
    fn into_arg_handler(self) -> ArgHandler<'a> {
        ArgHandler::flag(self)
    }
}

impl<'a, F, R> IntoArgHandler<'a, OptionalArg> for F
where
    F: FnMut(Option<String>) -> R + 'a,
    R: IntoHandlerResult,
{
    fn into_arg_handler(self) -> ArgHandler<'a> {
        ArgHandler::optional(self)
    }
}

impl<'a, F, R> IntoArgHandler<'a, MandatoryArg> for F
where
    F: FnMut(String) -> R + 'a,
    R: IntoHandlerResult,
{
    fn into_arg_handler(self) -> ArgHandler<'a> {
        ArgHandler::mandatory(self)
    }
}

impl<'a> IntoArgHandler<'a, Explicit> for ArgHandler<'a> {
    fn into_arg_handler(self) -> ArgHandler<'a> {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flag_fn() {}

    fn optional_fn(_value: Option<String>) {}

    fn mandatory_fn(_value: String) {}

    fn failing_fn() -> std::result::Result<(), String> {
        Err("dang".into())
    }

    #[test]
    fn test_need() {
        assert_eq!(Need::default(), Need::Nothing);
    }

    #[test]
    fn test_classify_functions() {
        assert_eq!(flag_fn.into_arg_handler().needs(), Need::Nothing);
        assert_eq!(
            optional_fn.into_arg_handler().needs(),
            Need::OptionalArgument
        );
        assert_eq!(mandatory_fn.into_arg_handler().needs(), Need::Argument);
        assert_eq!(failing_fn.into_arg_handler().needs(), Need::Nothing);
    }

    #[test]
    fn test_classify_closures() {
        let mut count = 0;
        let mut values: Vec<Option<String>> = Vec::new();

        {
            let h = (|| count += 1).into_arg_handler();
            assert_eq!(h.needs(), Need::Nothing);
        }

        {
            let h = (|value: Option<String>| values.push(value)).into_arg_handler();
            assert_eq!(h.needs(), Need::OptionalArgument);
        }

        {
            let h = (|value: String| values.push(Some(value))).into_arg_handler();
            assert_eq!(h.needs(), Need::Argument);
        }

        // Classification never calls the callback.
        assert_eq!(count, 0);
        assert!(values.is_empty());

        let h = (|_value: String| -> std::result::Result<(), String> { Ok(()) })
            .into_arg_handler();
        assert_eq!(h.needs(), Need::Argument);

        let h = ArgHandler::optional(|_value: Option<String>| ()).into_arg_handler();
        assert_eq!(h.needs(), Need::OptionalArgument);
    }

    #[test]
    fn test_handler_debug() {
        assert_eq!(
            format!("{:?}", ArgHandler::flag(flag_fn)),
            "ArgHandler::Nothing"
        );
        assert_eq!(
            format!("{:?}", ArgHandler::optional(optional_fn)),
            "ArgHandler::OptionalArgument"
        );
        assert_eq!(
            format!("{:?}", ArgHandler::mandatory(mandatory_fn)),
            "ArgHandler::Argument"
        );
    }

    #[test]
    fn test_get_arg() {
        #[derive(Debug)]
        struct TestData<'a> {
            needs: Need,
            next: Option<&'a str>,
            result: Option<&'a str>,
        }

        let tests = &[
            TestData {
                needs: Need::Nothing,
                next: None,
                result: None,
            },
            TestData {
                needs: Need::Nothing,
                next: Some("foo"),
                result: None,
            },
            TestData {
                needs: Need::Nothing,
                next: Some("-a"),
                result: None,
            },
            //------------------------------
            TestData {
                needs: Need::OptionalArgument,
                next: None,
                result: None,
            },
            TestData {
                needs: Need::OptionalArgument,
                next: Some("foo"),
                result: Some("foo"),
            },
            TestData {
                needs: Need::OptionalArgument,
                next: Some(""),
                result: Some(""),
            },
            TestData {
                needs: Need::OptionalArgument,
                next: Some(" -a"),
                result: Some(" -a"),
            },
            TestData {
                needs: Need::OptionalArgument,
                next: Some("-a"),
                result: None,
            },
            TestData {
                needs: Need::OptionalArgument,
                next: Some("--all"),
                result: None,
            },
            TestData {
                needs: Need::OptionalArgument,
                next: Some("-"),
                result: None,
            },
            //------------------------------
            TestData {
                needs: Need::Argument,
                next: None,
                result: None,
            },
            TestData {
                needs: Need::Argument,
                next: Some("foo"),
                result: Some("foo"),
            },
            TestData {
                needs: Need::Argument,
                next: Some("-a"),
                result: Some("-a"),
            },
            TestData {
                needs: Need::Argument,
                next: Some("--"),
                result: Some("--"),
            },
        ];

        for (i, d) in tests.iter().enumerate() {
            let handler = match d.needs {
                Need::Nothing => ArgHandler::flag(flag_fn),
                Need::OptionalArgument => ArgHandler::optional(optional_fn),
                Need::Argument => ArgHandler::mandatory(mandatory_fn),
            };

            let result = handler.get_arg(d.next);

            let msg = format!("test[{}]: {:?}, result: {:?}", i, d, result);

            assert_eq!(result.as_deref(), d.result, "{}", msg);
        }
    }

    #[test]
    fn test_apply_flag() {
        let mut count = 0;

        let mut handler = ArgHandler::flag(|| count += 1);

        assert!(handler.apply(None).is_ok());
        assert!(handler.apply(Some("ignored".into())).is_ok());

        drop(handler);

        assert_eq!(count, 2);
    }

    #[test]
    fn test_apply_optional() {
        let mut values: Vec<Option<String>> = Vec::new();

        let mut handler = ArgHandler::optional(|value: Option<String>| values.push(value));

        assert!(handler.apply(None).is_ok());
        assert!(handler.apply(Some("foo".into())).is_ok());

        drop(handler);

        assert_eq!(values, vec![None, Some("foo".into())]);
    }

    #[test]
    fn test_apply_mandatory() {
        let mut values: Vec<String> = Vec::new();

        let mut handler = ArgHandler::mandatory(|value: String| values.push(value));

        assert_eq!(handler.apply(None), Err(Error::MissingOptArg));
        assert!(handler.apply(Some("foo".into())).is_ok());
        assert!(handler.apply(Some("-a".into())).is_ok());

        drop(handler);

        // The callback must not have been called for the missing value.
        assert_eq!(values, vec!["foo".to_string(), "-a".to_string()]);
    }

    #[test]
    fn test_apply_failing_callback() {
        let mut handler = failing_fn.into_arg_handler();

        assert_eq!(
            handler.apply(None),
            Err(Error::HandlerError("dang".into()))
        );

        let mut handler = ArgHandler::mandatory(|value: String| {
            if value == "bad" {
                return Err(format!("invalid value {:?}", value));
            }

            Ok(())
        });

        assert!(handler.apply(Some("good".into())).is_ok());
        assert_eq!(
            handler.apply(Some("bad".into())),
            Err(Error::HandlerError("invalid value \"bad\"".into()))
        );
    }
}
