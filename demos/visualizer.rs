use chord_osc::{Config, Voice};

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .init();

    let cfg = Config {
        sample_rate: 4000.0,
        ..Default::default()
    };
    let harmonic_amount = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(100.0);
    let mut voice = Voice::new(cfg, harmonic_amount);

    let mut out_buf = vec![0.0f32; 256];
    voice.process_constant(110.0, &mut out_buf);

    for sample in out_buf.iter() {
        // construct a waveform
        let width = 80;
        let zero = width / 2;
        let amp = (sample * zero as f32) as i32;
        let mut wave = String::new();
        for i in 0..width {
            if i == zero {
                wave.push('|');
            } else if i == zero + amp {
                wave.push('+');
            } else {
                wave.push(' ');
            }
        }
        println!("{}", wave);
    }
}
