#![no_std]

use core::fmt::{self, Write};
use core::sync::atomic::{AtomicU8, Ordering};

use alloc::sync::Arc;
use ferrite_sync::{Spin, SpinIrq as _};

extern crate alloc;

pub trait ConsoleWrite: Send + Sync {
    fn write(&self, s: &str);
}

struct Console {
    console: Option<Arc<dyn ConsoleWrite>>,
}

static CONSOLE: Spin<Console> = Spin::new(Console::new());
static LEVEL: AtomicU8 = AtomicU8::new(Level::Info as u8);

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum Level {
    Debug = 0,
    Info = 1,
    Warn = 2,
    Fatal = 3,
}

pub fn set_level(level: Level) {
    LEVEL.store(level as u8, Ordering::Relaxed);
}

pub fn enabled(level: Level) -> bool {
    level as u8 >= LEVEL.load(Ordering::Relaxed)
}

impl Console {
    const fn new() -> Self {
        Self { console: None }
    }
}

impl Write for Console {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        if let Some(console) = self.console.as_ref() {
            console.write(s);
        }
        Ok(())
    }
}

pub fn set_console(console: Arc<dyn ConsoleWrite>) {
    CONSOLE.lock_irq().console.replace(console);
}

#[doc(hidden)]
pub fn do_print(args: fmt::Arguments) {
    let _ = CONSOLE.lock_irq().write_fmt(args);
}

#[doc(hidden)]
pub fn do_print_leveled(level: Level, args: fmt::Arguments) {
    if enabled(level) {
        do_print(args);
    }
}

#[macro_export]
macro_rules! print {
    ($($arg:tt)*) => {
        $crate::do_print(format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! println {
    () => {
        $crate::print!("\n")
    };
    ($($arg:tt)*) => {
        $crate::print!("{}\n", format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! println_debug {
    ($($arg:tt)*) => {
        $crate::do_print_leveled(
            $crate::Level::Debug,
            format_args!("[kernel:debug] {}\n", format_args!($($arg)*)),
        )
    };
}

#[macro_export]
macro_rules! println_info {
    ($($arg:tt)*) => {
        $crate::do_print_leveled(
            $crate::Level::Info,
            format_args!("[kernel: info] {}\n", format_args!($($arg)*)),
        )
    };
}

#[macro_export]
macro_rules! println_warn {
    ($($arg:tt)*) => {
        $crate::do_print_leveled(
            $crate::Level::Warn,
            format_args!("[kernel: warn] {}\n", format_args!($($arg)*)),
        )
    };
}

#[macro_export]
macro_rules! println_fatal {
    () => {
        $crate::do_print_leveled($crate::Level::Fatal, format_args!("[kernel:fatal]\n"))
    };
    ($($arg:tt)*) => {
        $crate::do_print_leveled(
            $crate::Level::Fatal,
            format_args!("[kernel:fatal] {}\n", format_args!($($arg)*)),
        )
    };
}
