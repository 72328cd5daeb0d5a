//! Latin upper/lower case, narrow and full-width alike.
//!
//! Case never crosses width: `ａ` becomes `Ａ`, not `A`.

use crate::unicode::{is_lower_case, is_upper_case};
use crate::Codepoint;

const CASE_DISTANCE: i32 = 0x20;

pub fn to_lower_case(cp: Codepoint) -> Codepoint {
    if is_upper_case(cp) {
        cp.offset(CASE_DISTANCE)
    } else {
        cp
    }
}

pub fn to_upper_case(cp: Codepoint) -> Codepoint {
    if is_lower_case(cp) {
        cp.offset(-CASE_DISTANCE)
    } else {
        cp
    }
}
