//! Command codes spoken by the instrument.
//!
//! Codes 0x00-0x06 are the full observed vocabulary. 0x02-0x04 appear on the
//! wire but carry no implemented behavior on either end.

/// Frame-start signature byte.
pub const SIGNATURE: u8 = 0x5A;

/// Consume the frame, mutate nothing.
pub const CLEAR: u8 = 0x00;

/// Wholesale replace of one trace slot's series (native-endian f64 pairs).
pub const PLOT: u8 = 0x01;

/// Reserved; consumed with no effect.
pub const SET_VISIBLE: u8 = 0x02;

/// Reserved; consumed with no effect.
pub const SET_STEP_TIME: u8 = 0x03;

/// Reserved; consumed with no effect.
pub const SET_TIME: u8 = 0x04;

/// Length-delimited text message for external logging.
pub const TEXT_MSG: u8 = 0x05;

/// Big-endian f32 values appended to trace slot 1.
pub const BYTE_BUFFER: u8 = 0x06;

/// Returns a human-readable name for a command code.
pub fn command_name(code: u8) -> &'static str {
    match code {
        CLEAR => "CLEAR",
        PLOT => "PLOT",
        SET_VISIBLE => "SET_VISIBLE",
        SET_STEP_TIME => "SET_STEP_TIME",
        SET_TIME => "SET_TIME",
        TEXT_MSG => "TEXT_MSG",
        BYTE_BUFFER => "BYTE_BUFFER",
        _ => "UNKNOWN",
    }
}

/// Returns true if the code is part of the instrument's vocabulary.
pub fn is_known(code: u8) -> bool {
    code <= BYTE_BUFFER
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vocabulary_covers_exactly_the_seven_codes() {
        for code in CLEAR..=BYTE_BUFFER {
            assert!(is_known(code));
            assert_ne!(command_name(code), "UNKNOWN");
        }
        assert!(!is_known(BYTE_BUFFER + 1));
        assert!(!is_known(SIGNATURE));
        assert_eq!(command_name(0x7F), "UNKNOWN");
    }
}
