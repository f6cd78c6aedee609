mod tests {
    use embassy_time::{Duration, Instant};
    use heapless::Vec;
    use strip_scenes::color::{OFF, Rgb};
    use strip_scenes::{
        InputChannel, InputEvent, InputMode, OutputDriver, PhysicalStrip, Renderer, SceneConfig,
        ScenarioId, VirtualStrip,
    };

    struct NullDriver;

    impl OutputDriver for NullDriver {
        fn write(&mut self, _colors: &[Rgb]) {}
    }

    fn single_strip<'a>(pixels: &'a mut [Rgb]) -> VirtualStrip<'a, NullDriver, 4> {
        let mut strips: Vec<PhysicalStrip<'_, NullDriver>, 4> = Vec::new();
        assert!(strips.push(PhysicalStrip::new(pixels, NullDriver)).is_ok());
        VirtualStrip::new(strips).unwrap()
    }

    fn instant_config(input_mode: InputMode) -> SceneConfig {
        SceneConfig {
            debounce: Duration::from_millis(0),
            input_mode,
        }
    }

    #[test]
    fn test_idle_until_first_selection() {
        let mut pixels = [OFF; 6];
        let strip = single_strip(&mut pixels);
        let channel = InputChannel::<8>::new();
        let mut renderer =
            Renderer::new(strip, channel.receiver(), &instant_config(InputMode::Switches));

        renderer.render(Instant::from_millis(0)).unwrap();
        assert_eq!(renderer.current_scenario(), None);
        for index in 0..6 {
            assert_eq!(renderer.strip().pixel(index), Ok(OFF));
        }
    }

    #[test]
    fn test_switch_selection_renders_scenario() {
        let mut pixels = [OFF; 6];
        let strip = single_strip(&mut pixels);
        let channel = InputChannel::<8>::new();
        let sender = channel.sender();
        let mut renderer =
            Renderer::new(strip, channel.receiver(), &instant_config(InputMode::Switches));

        sender
            .try_send(InputEvent::Switches([false, false, true, false]))
            .unwrap();
        renderer.render(Instant::from_millis(0)).unwrap();

        assert_eq!(renderer.current_scenario(), Some(ScenarioId::EveryThird));
        // Every third pixel lit, the rest off
        assert_ne!(renderer.strip().pixel(0), Ok(OFF));
        assert_eq!(renderer.strip().pixel(1), Ok(OFF));
        assert_eq!(renderer.strip().pixel(2), Ok(OFF));
        assert_ne!(renderer.strip().pixel(3), Ok(OFF));
    }

    #[test]
    fn test_repeated_polls_do_not_restart_scenario() {
        let mut pixels = [OFF; 4];
        let strip = single_strip(&mut pixels);
        let channel = InputChannel::<8>::new();
        let sender = channel.sender();
        let mut renderer =
            Renderer::new(strip, channel.receiver(), &instant_config(InputMode::Switches));

        let wipe_switches = InputEvent::Switches([false, false, false, true]);
        sender.try_send(wipe_switches).unwrap();
        renderer.render(Instant::from_millis(0)).unwrap();
        assert_eq!(renderer.current_scenario(), Some(ScenarioId::ColorWipe));
        assert!(!renderer.is_scene_complete());

        // The poller keeps reporting the same switches; if each poll
        // re-entered the scenario the wipe clock would restart and the
        // wipe could never finish.
        for millis in [500u64, 1_000, 1_500, 2_000] {
            sender.try_send(wipe_switches).unwrap();
            renderer.render(Instant::from_millis(millis)).unwrap();
        }
        assert!(renderer.is_scene_complete());
    }

    #[test]
    fn test_console_mode_selects_scenarios() {
        let mut pixels = [OFF; 6];
        let strip = single_strip(&mut pixels);
        let channel = InputChannel::<8>::new();
        let sender = channel.sender();
        let mut renderer =
            Renderer::new(strip, channel.receiver(), &instant_config(InputMode::Console));

        sender.try_send(InputEvent::Console(b'2')).unwrap();
        renderer.render(Instant::from_millis(0)).unwrap();
        assert_eq!(renderer.current_scenario(), Some(ScenarioId::TheaterChase));

        // Unknown console bytes leave the selection alone
        sender.try_send(InputEvent::Console(b'x')).unwrap();
        renderer.render(Instant::from_millis(10)).unwrap();
        assert_eq!(renderer.current_scenario(), Some(ScenarioId::TheaterChase));
    }

    #[test]
    fn test_non_selected_input_surface_is_ignored() {
        let mut pixels = [OFF; 6];
        let strip = single_strip(&mut pixels);
        let channel = InputChannel::<8>::new();
        let sender = channel.sender();
        let mut renderer =
            Renderer::new(strip, channel.receiver(), &instant_config(InputMode::Switches));

        // Console traffic must not drive a switches-mode renderer
        sender.try_send(InputEvent::Console(b'3')).unwrap();
        renderer.render(Instant::from_millis(0)).unwrap();
        assert_eq!(renderer.current_scenario(), None);

        sender
            .try_send(InputEvent::Switches([true, false, false, false]))
            .unwrap();
        renderer.render(Instant::from_millis(10)).unwrap();
        assert_eq!(
            renderer.current_scenario(),
            Some(ScenarioId::ConstrainedRainbow)
        );
    }

    #[test]
    fn test_debounced_transition_enters_once() {
        let mut pixels = [OFF; 4];
        let strip = single_strip(&mut pixels);
        let channel = InputChannel::<8>::new();
        let sender = channel.sender();
        let config = SceneConfig {
            debounce: Duration::from_millis(50),
            input_mode: InputMode::Switches,
        };
        let mut renderer = Renderer::new(strip, channel.receiver(), &config);

        let chase = InputEvent::Switches([false, true, false, false]);
        sender.try_send(chase).unwrap();
        renderer.render(Instant::from_millis(0)).unwrap();
        // Not committed yet: still undefined
        assert_eq!(renderer.current_scenario(), None);

        sender.try_send(chase).unwrap();
        renderer.render(Instant::from_millis(60)).unwrap();
        assert_eq!(renderer.current_scenario(), Some(ScenarioId::TheaterChase));
    }
}
