//! Audio system using Web Audio API
//!
//! Hit sounds are synthesized with oscillators, so no audio files are
//! fetched. Every call builds fresh nodes, which lets hits overlap. All
//! failures are ignored: audio never holds up the simulation.

use web_sys::{AudioContext, GainNode, OscillatorNode, OscillatorType};

use crate::settings::Settings;
use crate::sim::{GameEvent, HitSound};

/// Audio manager for the game
pub struct AudioManager {
    ctx: Option<AudioContext>,
    volume: f32,
}

impl AudioManager {
    pub fn new(settings: &Settings) -> Self {
        // May fail outside a secure context
        let ctx = AudioContext::new().ok();
        if ctx.is_none() {
            log::warn!("Failed to create AudioContext - audio disabled");
        }
        Self {
            ctx,
            volume: settings.effective_volume(),
        }
    }

    /// Play the sounds for a tick's events
    pub fn handle_events(&self, events: &[GameEvent]) {
        for event in events {
            if let GameEvent::BlockHit { sound, .. } = event {
                self.play(*sound);
            }
        }
    }

    /// Fire-and-forget one hit sound
    pub fn play(&self, sound: HitSound) {
        let vol = self.volume;
        if vol <= 0.0 {
            return;
        }

        let Some(ctx) = &self.ctx else { return };

        // Browsers keep the context suspended until a user gesture
        if ctx.state() == web_sys::AudioContextState::Suspended {
            let _ = ctx.resume();
        }

        match sound {
            HitSound::Grass => self.play_grass(ctx, vol),
            HitSound::Stone => self.play_stone(ctx, vol),
        }
    }

    /// Create an oscillator with gain envelope
    fn create_osc(
        &self,
        ctx: &AudioContext,
        freq: f32,
        osc_type: OscillatorType,
    ) -> Option<(OscillatorNode, GainNode)> {
        let osc = ctx.create_oscillator().ok()?;
        let gain = ctx.create_gain().ok()?;

        osc.set_type(osc_type);
        osc.frequency().set_value(freq);
        osc.connect_with_audio_node(&gain).ok()?;
        gain.connect_with_audio_node(&ctx.destination()).ok()?;

        Some((osc, gain))
    }

    /// Grass/dirt - soft crunchy thud
    fn play_grass(&self, ctx: &AudioContext, vol: f32) {
        let t = ctx.current_time();

        // Low thud
        if let Some((osc, gain)) = self.create_osc(ctx, 140.0, OscillatorType::Triangle) {
            gain.gain().set_value_at_time(vol * 0.4, t).ok();
            gain.gain()
                .exponential_ramp_to_value_at_time(0.01, t + 0.12)
                .ok();
            osc.frequency()
                .exponential_ramp_to_value_at_time(70.0, t + 0.12)
                .ok();
            osc.start().ok();
            osc.stop_with_when(t + 0.15).ok();
        }

        // Crunch: fast jittering sawtooth
        if let Some((osc, gain)) = self.create_osc(ctx, 900.0, OscillatorType::Sawtooth) {
            gain.gain().set_value_at_time(vol * 0.08, t).ok();
            gain.gain()
                .exponential_ramp_to_value_at_time(0.01, t + 0.08)
                .ok();
            for (i, freq) in [900.0, 1400.0, 700.0, 1200.0, 500.0].iter().enumerate() {
                osc.frequency()
                    .set_value_at_time(*freq, t + i as f64 * 0.015)
                    .ok();
            }
            osc.start().ok();
            osc.stop_with_when(t + 0.1).ok();
        }
    }

    /// Stone/bedrock - short hard click
    fn play_stone(&self, ctx: &AudioContext, vol: f32) {
        let t = ctx.current_time();

        if let Some((osc, gain)) = self.create_osc(ctx, 1800.0, OscillatorType::Square) {
            gain.gain().set_value_at_time(vol * 0.15, t).ok();
            gain.gain()
                .exponential_ramp_to_value_at_time(0.01, t + 0.05)
                .ok();
            osc.frequency()
                .exponential_ramp_to_value_at_time(600.0, t + 0.05)
                .ok();
            osc.start().ok();
            osc.stop_with_when(t + 0.06).ok();
        }

        // Body resonance
        if let Some((osc, gain)) = self.create_osc(ctx, 320.0, OscillatorType::Sine) {
            gain.gain().set_value_at_time(vol * 0.3, t).ok();
            gain.gain()
                .exponential_ramp_to_value_at_time(0.01, t + 0.1)
                .ok();
            osc.start().ok();
            osc.stop_with_when(t + 0.12).ok();
        }
    }
}
