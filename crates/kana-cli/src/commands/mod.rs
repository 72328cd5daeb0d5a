/// Print the error after the message and exit with status 1. Defined ahead
/// of the `mod` items so every `*_ops` module sees it.
macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            std::process::exit(1);
        })
    };
}

pub mod config_ops;
pub mod convert_ops;
pub mod inspect_ops;
