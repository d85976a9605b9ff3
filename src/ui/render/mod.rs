mod all;
mod editing;
mod footer;
mod log;
mod wheel;

use self::log::log;
use super::*;
use footer::footer;

pub use all::all as render;
