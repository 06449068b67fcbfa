//! Plays a held A3 chord and sweeps the harmonic amount up and back down from a control thread.

use std::time::Duration;

use anyhow::{anyhow, Result};
use chord_osc::{Config, Voice};
use cpal::{
    traits::{DeviceTrait, HostTrait, StreamTrait},
    Sample,
};

const ROOT: f32 = 220.0;
const SWEEP_STEPS: u32 = 200;

fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .init();

    let host = cpal::default_host();
    let out_dev = host
        .default_output_device()
        .ok_or_else(|| anyhow!("no output device available"))?;
    let config = out_dev
        .supported_output_configs()?
        .find(|c| c.sample_format() == cpal::SampleFormat::F32)
        .ok_or_else(|| anyhow!("no f32 output configuration"))?
        .with_max_sample_rate();

    let sample_rate = config.sample_rate().0 as f32;
    let channel_count = config.channels() as usize;
    log::info!("sample rate {}, {} channels", sample_rate, channel_count);

    let cfg = Config {
        sample_rate,
        ..Default::default()
    };
    let mut voice = Voice::new(cfg, 0.0);
    let harmonic_amount = voice.harmonic_amount();

    let stream = out_dev.build_output_stream(
        &config.config(),
        {
            // Scratch space for the first channel, sized once up front.
            let mut mono = vec![0.0f32; 8192];
            move |d: &mut [f32], _info| {
                d.fill(Sample::EQUILIBRIUM);
                for frames in d.chunks_mut(mono.len() * channel_count) {
                    let len = frames.len() / channel_count;
                    let mono = &mut mono[..len];
                    voice.process_constant(ROOT, mono);
                    for (frame, sample) in frames.chunks_mut(channel_count).zip(mono.iter()) {
                        frame.fill(*sample * 0.5);
                    }
                }
            }
        },
        |e| log::error!("stream error: {}", e),
        None,
    )?;
    stream.play()?;

    // Control thread: root alone, then the full chord, then back.
    let step = Duration::from_millis(20);
    for i in 0..=SWEEP_STEPS {
        harmonic_amount.set(i as f32 * 100.0 / SWEEP_STEPS as f32);
        std::thread::sleep(step);
    }
    for i in (0..=SWEEP_STEPS).rev() {
        harmonic_amount.set(i as f32 * 100.0 / SWEEP_STEPS as f32);
        std::thread::sleep(step);
    }

    Ok(())
}
