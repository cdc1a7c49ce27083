//! Subcommand implementations for `shobdotool`. Each `*_cmd` function owns
//! its I/O and exits the process with status 1 on error.

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            std::process::exit(1);
        })
    };
}

pub mod classify_ops;
pub mod convert_ops;
pub mod table_ops;
