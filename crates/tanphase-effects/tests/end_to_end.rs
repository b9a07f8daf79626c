//! End-to-end behaviour of the phaser and its host adapter.

use tanphase_core::{Effect, Lfo, ParameterInfo, time_to_increment};
use tanphase_effects::{ModFx, ModFxParam, Phaser};

const SAMPLE_RATE: f32 = 48000.0;

fn impulse(len: usize) -> Vec<f32> {
    let mut signal = vec![0.0; len];
    signal[0] = 1.0;
    signal
}

#[test]
fn impulse_response_starts_at_first_ramp_step_and_decays() {
    let mut phaser = Phaser::new(SAMPLE_RATE);
    phaser.set_time(0.25);
    phaser.set_depth(0.5);
    phaser.reset();

    let input = impulse(1001);
    let mut output = vec![0.0; input.len()];
    phaser.process_block(&input, &mut output);

    // First output: impulse × first ramp step × dry, passed through one
    // all-pass stage with empty memory.
    let mut reference = Phaser::new(SAMPLE_RATE);
    reference.process(0.0);
    let b0 = reference.coefficient();
    let expected = b0 * 0.0625 * 0.625;
    assert!(output[0] != 0.0);
    assert!(
        (output[0] - expected).abs() < 1e-6,
        "first sample {} expected {expected}",
        output[0]
    );

    assert!(output.iter().all(|y| y.is_finite()));
    let peak = output.iter().fold(0.0f32, |m, y| m.max(y.abs()));
    let tail = output[900..].iter().fold(0.0f32, |m, y| m.max(y.abs()));
    assert!(peak < 0.1, "peak {peak}");
    assert!(tail < 1e-6, "tail {tail} did not decay");
}

#[test]
fn silence_then_impulse_stays_bounded() {
    for depth in [0.0, 0.5, 1.0] {
        for time in [0.0, 0.25, 1.0] {
            let mut phaser = Phaser::new(SAMPLE_RATE);
            phaser.set_time(time);
            phaser.set_depth(depth);

            let mut silence = vec![0.0; 10_000];
            phaser.process_block_inplace(&mut silence);
            assert!(silence.iter().all(|&y| y == 0.0));

            let input = impulse(10_000);
            let mut output = vec![0.0; input.len()];
            phaser.process_block(&input, &mut output);
            for &y in &output {
                assert!(
                    y.is_finite() && y.abs() <= 1.0 + 1e-6,
                    "time={time} depth={depth}: {y}"
                );
            }
        }
    }
}

#[test]
fn loud_input_is_limited() {
    let mut phaser = Phaser::new(SAMPLE_RATE);
    phaser.set_depth(1.0);
    let input: Vec<f32> = (0..48_000)
        .map(|n| if (n / 50) % 2 == 0 { 20.0 } else { -20.0 })
        .collect();
    let mut output = vec![0.0; input.len()];
    phaser.process_block(&input, &mut output);
    assert!(output.iter().all(|y| y.abs() <= 1.0 + 1e-6));
    assert!(output.iter().any(|y| y.abs() > 0.9), "limiter never engaged");
}

#[test]
fn block_size_does_not_change_output() {
    let input: Vec<f32> = (0..4096).map(|n| ((n as f32) * 0.01).sin() * 0.5).collect();

    let mut whole = Phaser::new(SAMPLE_RATE);
    let mut expected = vec![0.0; input.len()];
    whole.process_block(&input, &mut expected);

    for block in [1, 7, 64, 333] {
        let mut phaser = Phaser::new(SAMPLE_RATE);
        let mut output = vec![0.0; input.len()];
        for (inp, out) in input.chunks(block).zip(output.chunks_mut(block)) {
            phaser.process_block(inp, out);
        }
        assert_eq!(output, expected, "block size {block}");
    }
}

#[test]
fn coefficient_sweeps_with_the_lfo() {
    let mut phaser = Phaser::new(SAMPLE_RATE);
    phaser.set_time(0.0);
    phaser.set_depth(1.0);
    let period = (u32::MAX / time_to_increment(0.0, SAMPLE_RATE)) as usize;

    let mut lo = f32::MAX;
    let mut hi = f32::MIN;
    for _ in 0..4 * period {
        phaser.process(0.0);
        lo = lo.min(phaser.coefficient());
        hi = hi.max(phaser.coefficient());
    }
    assert!(lo > -0.94 && hi < 0.94, "range [{lo}, {hi}]");
    assert!(hi - lo > 0.8, "sweep too narrow: [{lo}, {hi}]");
}

#[test]
fn zero_depth_is_a_single_allpass_stage() {
    let mut phaser = Phaser::new(SAMPLE_RATE);
    phaser.set_depth(0.0);
    // Let the input fade finish.
    for _ in 0..200 {
        phaser.process(0.0);
    }

    // No feedback and a fixed coefficient: the tap is one all-pass stage.
    // Keep the impulse below the limiter's linear threshold.
    let amplitude = 0.04;
    let mut input = impulse(4000);
    input[0] = amplitude;
    let mut output = vec![0.0; input.len()];
    phaser.process_block(&input, &mut output);

    assert!((phaser.coefficient() - 0.025).abs() < 1e-3);
    let energy: f32 = output.iter().map(|y| y * y).sum();
    let expected = amplitude * amplitude;
    assert!((energy - expected).abs() < expected * 1e-3, "energy {energy}");
}

#[test]
fn host_adapter_matches_phaser() {
    let mut fx = ModFx::on_load(SAMPLE_RATE);
    fx.on_parameter_change(ModFxParam::Time as usize, 1 << 29);
    fx.on_parameter_change(ModFxParam::Depth as usize, 3 << 29);

    let mut phaser = Phaser::new(SAMPLE_RATE);
    phaser.set_param(0, 25.0);
    phaser.set_param(1, 75.0);

    let mono: Vec<f32> = (0..256).map(|n| ((n as f32) * 0.05).sin()).collect();
    let interleaved: Vec<f32> = mono.iter().flat_map(|&x| [x, 0.0]).collect();
    let mut main_out = vec![0.0; interleaved.len()];
    let mut sub_out = vec![0.0; interleaved.len()];

    let mut expected = vec![0.0; mono.len()];
    for (chunk_in, chunk_out) in mono.chunks(64).zip(expected.chunks_mut(64)) {
        phaser.process_block(chunk_in, chunk_out);
    }
    for (block_in, (block_main, block_sub)) in interleaved
        .chunks(128)
        .zip(main_out.chunks_mut(128).zip(sub_out.chunks_mut(128)))
    {
        fx.on_process_block(block_in, block_main, block_in, block_sub, 64);
    }

    for (n, &y) in expected.iter().enumerate() {
        assert_eq!(main_out[2 * n], y);
        assert_eq!(main_out[2 * n + 1], y);
        assert_eq!(sub_out[2 * n], y);
        assert_eq!(sub_out[2 * n + 1], y);
    }
}

#[test]
fn resume_restarts_fade_in() {
    let mut fx = ModFx::on_load(SAMPLE_RATE);
    let input = vec![0.5; 2048];
    let mut main_out = vec![0.0; 2048];
    let mut sub_out = vec![0.0; 2048];
    fx.on_process_block(&input, &mut main_out, &input, &mut sub_out, 1024);
    assert_eq!(fx.phaser().input_gain(), 1.0);

    fx.on_resume();
    fx.on_resume();
    assert!(fx.phaser().is_cleared());

    fx.on_process_block(&input[..2], &mut main_out[..2], &input[..2], &mut sub_out[..2], 1);
    assert_eq!(fx.phaser().input_gain(), 0.0625);
}

/// A `time` write from the control side between two blocks keeps the old
/// increment for every sample of the first block and switches to the new one
/// exactly at the next block boundary.
#[test]
fn time_change_lands_on_the_next_block_boundary() {
    const BLOCK: usize = 256;
    let old_dt = time_to_increment(0.25, SAMPLE_RATE);
    let new_dt = time_to_increment(0.9, SAMPLE_RATE);
    assert_ne!(old_dt, new_dt);

    let mut phaser = Phaser::new(SAMPLE_RATE);
    let params = phaser.params();
    let mut stepped = Phaser::new(SAMPLE_RATE);
    let stepped_params = stepped.params();
    let mut lfo = Lfo::new();

    let input: Vec<f32> = (0..BLOCK).map(|i| (i as f32 * 0.05).sin() * 0.5).collect();
    let mut output = vec![0.0; BLOCK];

    for (time, dt) in [(0.25, old_dt), (0.9, new_dt)] {
        params.set_time(time);
        stepped_params.set_time(time);
        // Written, not yet applied.
        assert_eq!(phaser.lfo().increment(), old_dt);

        phaser.process_block(&input, &mut output);
        assert_eq!(phaser.lfo().increment(), dt);

        // Same block, one sample at a time: every sample sees `dt`.
        stepped.prepare_block();
        lfo.set_increment(dt);
        for (n, &x) in input.iter().enumerate() {
            assert_eq!(stepped.process(x), output[n], "sample {n} at time {time}");
            assert_eq!(stepped.lfo().increment(), dt);
            lfo.advance();
            assert_eq!(stepped.lfo().out2(), lfo.out2());
        }
        assert_eq!(phaser.lfo().phase(), lfo.phase());
        assert_eq!(phaser.lfo().out2(), lfo.out2());
    }
}
