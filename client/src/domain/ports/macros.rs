//! Defines a helper macro for generating domain port error enums.
//!
//! Every generated variant carries a single `message` field and gets a
//! snake-case constructor accepting `impl Into<String>`.

macro_rules! define_port_error {
    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $message:literal
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant {
                    /// Failure description.
                    message: String,
                },
            )*
        }

        impl $name {
            $(
                ::paste::paste! {
                    #[doc = concat!("Build a `", stringify!($variant), "` error.")]
                    pub fn [<$variant:snake>](message: impl Into<String>) -> Self {
                        Self::$variant {
                            message: message.into(),
                        }
                    }
                }
            )*
        }
    };
}

pub(crate) use define_port_error;

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    define_port_error! {
        /// Errors used only by these tests.
        pub enum ExamplePortError {
            /// Single-word variant.
            Refused => "refused: {message}",
            /// Multi-word variant.
            TooManyRetries => "too many retries: {message}",
        }
    }

    #[test]
    fn constructors_accept_str() {
        let err = ExamplePortError::refused("connection reset");
        assert_eq!(err.to_string(), "refused: connection reset");
    }

    #[test]
    fn constructors_are_snake_cased() {
        let err = ExamplePortError::too_many_retries(String::from("3 attempts"));
        assert_eq!(
            err,
            ExamplePortError::TooManyRetries {
                message: "3 attempts".to_owned()
            }
        );
    }
}
