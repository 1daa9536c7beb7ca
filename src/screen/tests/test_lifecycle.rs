#[cfg(test)]
mod tests {
    use crate::events::ScreenEvent;
    use crate::screen::tests::common::{
        finish_loading, full_party, open_screen, press, MockHost, TestPokemonBuilder,
        TEST_CALLBACK,
    };
    use crate::screen::Phase;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use schema::{Ailment, Buttons, SummaryScreenStyle, STATUS_BURN, STATUS_POISON};

    #[test]
    fn test_open_takes_over_frame_loop_without_drawing() {
        let mut host = MockHost::new();
        let mut mons = full_party();
        let screen = open_screen(&mut host, &mut mons, SummaryScreenStyle::Party);

        assert_eq!(host.frame_loop_entries, 1);
        assert!(host.scenes.is_empty());
        assert_eq!(screen.phase(), &Phase::Loading { next_slot: 0 });
        assert_eq!(screen.callback(), TEST_CALLBACK);
        assert_eq!(
            screen.events().events(),
            &[ScreenEvent::Opened {
                style: SummaryScreenStyle::Party,
                party_size: 6
            }]
        );
    }

    #[test]
    fn test_loading_reveals_one_slot_per_frame() {
        let mut host = MockHost::new();
        let mut mons = full_party();
        let mut screen = open_screen(&mut host, &mut mons, SummaryScreenStyle::Party);

        for expected in 1..=5 {
            press(&mut screen, &mut host, Buttons::empty());
            assert_eq!(host.last_scene().slots.len(), expected);
        }
        press(&mut screen, &mut host, Buttons::empty());
        assert_eq!(screen.phase(), &Phase::Browsing);
        assert_eq!(host.last_scene().slots.len(), 6);

        let revealed = screen
            .events()
            .events()
            .iter()
            .filter(|e| matches!(e, ScreenEvent::SlotRevealed { .. }))
            .count();
        assert_eq!(revealed, 6);
    }

    #[test]
    fn test_input_ignored_while_loading() {
        let mut host = MockHost::new();
        let mut mons = full_party();
        let mut screen = open_screen(&mut host, &mut mons, SummaryScreenStyle::Party);

        press(&mut screen, &mut host, Buttons::B);
        assert!(!screen.is_closed());
        assert!(host.returned_to.is_empty());
    }

    #[test]
    fn test_b_hands_control_back_to_callback() {
        let mut host = MockHost::new();
        let mut mons = full_party();
        let mut screen = open_screen(&mut host, &mut mons, SummaryScreenStyle::Party);
        finish_loading(&mut screen, &mut host);

        let presented = host.scenes.len();
        press(&mut screen, &mut host, Buttons::B);

        assert!(screen.is_closed());
        assert_eq!(host.returned_to, vec![TEST_CALLBACK]);
        assert_eq!(screen.events().events().last(), Some(&ScreenEvent::Closed));
        assert_eq!(host.scenes.len(), presented, "closing frame draws nothing");

        press(&mut screen, &mut host, Buttons::A);
        assert!(screen.is_closed());
        assert_eq!(host.scenes.len(), presented);
        assert_eq!(host.returned_to.len(), 1);
    }

    #[test]
    fn test_empty_party_opens_and_closes() {
        let mut host = MockHost::new();
        let mut mons = Vec::new();
        let mut screen = open_screen(&mut host, &mut mons, SummaryScreenStyle::Party);

        press(&mut screen, &mut host, Buttons::empty());
        assert_eq!(screen.phase(), &Phase::Browsing);
        assert!(host.last_scene().slots.is_empty());

        press(&mut screen, &mut host, Buttons::A | Buttons::RIGHT);
        assert_eq!(screen.phase(), &Phase::Browsing);
        assert_eq!(screen.focus(), 0);

        press(&mut screen, &mut host, Buttons::B);
        assert!(screen.is_closed());
    }

    #[rstest]
    #[case(SummaryScreenStyle::Party, 6)]
    #[case(SummaryScreenStyle::ReadOnly, 1)]
    #[case(SummaryScreenStyle::ReadOnly, 3)]
    fn test_party_sizes_load_fully(#[case] style: SummaryScreenStyle, #[case] size: usize) {
        let mut host = MockHost::new();
        let mut mons: Vec<_> = full_party().into_iter().take(size).collect();
        let mut screen = open_screen(&mut host, &mut mons, style);
        finish_loading(&mut screen, &mut host);

        assert_eq!(screen.style(), style);
        assert_eq!(screen.party().len(), size);
        assert_eq!(host.last_scene().slots.len(), size);
        assert_eq!(host.scenes.len(), size);
    }

    #[test]
    fn test_slot_text_comes_from_records() {
        let mut host = MockHost::new();
        let mut mons = vec![TestPokemonBuilder::new(25, 12)
            .with_nickname("Sparky")
            .with_hp(0)
            .build()];
        let mut screen = open_screen(&mut host, &mut mons, SummaryScreenStyle::ReadOnly);
        finish_loading(&mut screen, &mut host);

        let view = host.last_scene().slot(0).unwrap();
        let text = view.text.as_ref().unwrap();
        assert_eq!(text.name.decode(), "Sparky");
        assert_eq!(text.stats.as_ref().unwrap().level.decode(), "Lv12");
        assert_eq!(text.stats.as_ref().unwrap().hp.decode(), "0  /46 ");
        assert_eq!(view.species, 25);
    }

    #[rstest]
    #[case(STATUS_POISON, 10, Ailment::Poison)]
    #[case(STATUS_BURN, 10, Ailment::Burn)]
    #[case(STATUS_POISON, 0, Ailment::Fainted)]
    #[case(0, 10, Ailment::None)]
    fn test_status_reaches_the_slot_icon(
        #[case] status: u32,
        #[case] hp: u16,
        #[case] expected: Ailment,
    ) {
        let mut host = MockHost::new();
        let mut mons = vec![TestPokemonBuilder::new(1, 5)
            .with_status(status)
            .with_hp(hp)
            .build()];
        let mut screen = open_screen(&mut host, &mut mons, SummaryScreenStyle::Party);
        finish_loading(&mut screen, &mut host);

        assert_eq!(host.last_scene().slot(0).unwrap().ailment, expected);
    }
}
