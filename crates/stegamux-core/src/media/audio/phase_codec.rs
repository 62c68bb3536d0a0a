//! Phase coding: payload bits are imprinted onto the phase angles of the
//! carrier spectrum.
//!
//! The waveform is transformed as a whole; bit `i` (1-based) forces the phase
//! of bin `i` to `0` (bit 0) or `π/2` (bit 1), with the conjugate mirror bin
//! `N - i` forced to the negated angle so the inverse transform stays
//! real-valued. Magnitudes are kept as they were. The reconstructed carrier
//! is always mono 16-bit at the source sample rate.

use std::f64::consts::PI;

use hound::{SampleFormat, WavSpec};
use rustfft::{num_complex::Complex, FftPlanner};

use crate::error::StegoError;
use crate::media::audio::{pcm, require_16_bit};
use crate::media::types::WavAudio;
use crate::payload;
use crate::result::Result;

/// one guard bin keeps the topmost used bin strictly below `N / 2`, which is
/// where the decoder stops scanning
fn bin_capacity(sample_count: usize) -> usize {
    (sample_count / 2).saturating_sub(1)
}

/// forces the phase of bin `i + 1` per payload bit and mirrors the conjugate bin
fn imprint_phases(phase: &mut [f64], bits: &[bool]) {
    let n = phase.len();
    for (i, bit) in bits.iter().enumerate() {
        let bin = i + 1;
        phase[bin] = if *bit { PI / 2.0 } else { 0.0 };
        phase[n - bin] = -phase[bin];
    }
}

/// maps a phase angle back to a payload bit, defaulting to 0 in the
/// ambiguous region between the two target angles
fn classify(phase: f64) -> bool {
    if phase.abs() < PI / 4.0 {
        return false;
    }
    (phase.abs() - PI / 2.0).abs() < PI / 4.0
}

pub fn embed(audio: &mut WavAudio, message: &str) -> Result<()> {
    let (spec, samples) = audio;
    require_16_bit(spec)?;

    let mono = pcm::collapse_channels(spec, samples);
    let bits = payload::header::encode(message);
    let capacity = bin_capacity(mono.len());
    if bits.len() > capacity {
        return Err(StegoError::CapacityError {
            needed: bits.len(),
            available: capacity,
        });
    }

    let n = mono.len();
    let mut spectrum: Vec<Complex<f64>> = mono
        .iter()
        .map(|s| Complex::new(f64::from(*s), 0.0))
        .collect();
    let mut planner = FftPlanner::new();
    planner.plan_fft_forward(n).process(&mut spectrum);

    let magnitude: Vec<f64> = spectrum.iter().map(|c| c.norm()).collect();
    let mut phase: Vec<f64> = spectrum.iter().map(|c| c.arg()).collect();
    imprint_phases(&mut phase, &bits);

    let mut modified: Vec<Complex<f64>> = magnitude
        .iter()
        .zip(&phase)
        .map(|(m, p)| Complex::from_polar(*m, *p))
        .collect();
    planner.plan_fft_inverse(n).process(&mut modified);

    let scale = 1.0 / n as f64;
    *samples = modified
        .iter()
        .map(|c| {
            (c.re * scale)
                .round()
                .clamp(f64::from(i16::MIN), f64::from(i16::MAX)) as i16
        })
        .collect();
    *spec = WavSpec {
        channels: 1,
        sample_rate: spec.sample_rate,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    };

    Ok(())
}

pub fn extract(audio: &WavAudio) -> Result<String> {
    let (spec, samples) = audio;
    require_16_bit(spec)?;

    let mono = pcm::collapse_channels(spec, samples);
    let n = mono.len();
    if n < 2 {
        return Ok(String::new());
    }

    let mut spectrum: Vec<Complex<f64>> = mono
        .iter()
        .map(|s| Complex::new(f64::from(*s), 0.0))
        .collect();
    FftPlanner::new().plan_fft_forward(n).process(&mut spectrum);

    let bits = (1..n / 2).map(|bin| classify(spectrum[bin].arg()));

    Ok(payload::header::decode(bits))
}
