mod common;

mod tests {
    use myrtio_zone_lamp::renderer::{channel_level, compose, level_to_duty};
    use myrtio_zone_lamp::{Button, LampConfig, LampState, Polarity, Renderer};

    use crate::common::{LEDS, RecordingOutput, lamp, ms};

    #[test]
    fn test_level_to_duty() {
        assert_eq!(level_to_duty(0, Polarity::ActiveHigh), 0);
        assert_eq!(level_to_duty(500, Polarity::ActiveHigh), 128);
        assert_eq!(level_to_duty(1000, Polarity::ActiveHigh), 255);
        assert_eq!(level_to_duty(4000, Polarity::ActiveHigh), 255);
    }

    #[test]
    fn test_level_to_duty_active_low() {
        assert_eq!(level_to_duty(0, Polarity::ActiveLow), 255);
        assert_eq!(level_to_duty(1000, Polarity::ActiveLow), 0);
        assert_eq!(level_to_duty(600, Polarity::ActiveLow), 255 - 153);
    }

    #[test]
    fn test_unpowered_state_renders_all_off() {
        let config = LampConfig::DEFAULT;
        let state: LampState<LEDS> = LampState::new(4);

        for i in 0..LEDS {
            assert_eq!(channel_level(&state, &config, i), 0);
        }
        assert_eq!(compose(&state, &config), [0; LEDS]);

        let mut renderer: Renderer<_, LEDS> = Renderer::new(RecordingOutput::default());
        renderer.render(&state, &config);
        assert_eq!(renderer.output().frames, vec![vec![0; LEDS]]);
    }

    #[test]
    fn test_levels_follow_brightness_table() {
        let mut lamp = lamp();
        lamp.handle(Button::Power, ms(0));

        let expected = [600, 700, 800, 200, 400];
        for level in expected {
            assert_eq!(channel_level(lamp.state(), lamp.config(), 0), level);
            lamp.handle(Button::BrightnessSpeed, ms(0));
        }
    }

    #[test]
    fn test_overlay_overrides_brightness() {
        let mut lamp = lamp();
        lamp.handle(Button::Power, ms(0));
        lamp.handle(Button::Timer, ms(0));
        lamp.handle(Button::Timer, ms(0));
        lamp.handle(Button::Timer, ms(0));

        let levels: Vec<u16> = (0..LEDS)
            .map(|i| channel_level(lamp.state(), lamp.config(), i))
            .collect();
        assert_eq!(levels, [1000, 1000, 1000, 0, 0, 0]);
    }
}
