//! Custom waveform fragment and its baseline.
//!
//! At most [`MAX_FRAGMENT_LEN`] values, each any number from 0 to 255.

pub const MAX_FRAGMENT_LEN: usize = 64;

pub const CUSTOM_WAVE_FRAGMENT: [u8; 62] = [
    150, 150, 150, 150, 150, 150, 150, 150, 150, 150, //
    50, 50, 50, 50, 50, 50, 50, 50, 50, 50, //
    150, 150, 150, 150, 150, 150, 150, 150, 150, 150, //
    50, 50, 50, 50, 50, 50, 50, 50, 50, 50, //
    150, 150, 150, 150, 150, 150, 150, 150, 150, 150, //
    50, 50, 50, 50, 50, 50, 50, 50, 50, 50, //
    150, 150,
];

pub const WAVE_BASELINE: u8 = 50;

const _: () = assert!(CUSTOM_WAVE_FRAGMENT.len() <= MAX_FRAGMENT_LEN);
