#[cfg(test)]
mod tests {
    use crate::events::ScreenEvent;
    use crate::scene::MenuView;
    use crate::screen::tests::common::{
        browsing_screen, finish_loading, full_party, open_screen, press, MockHost,
        TestPokemonBuilder,
    };
    use crate::screen::{PartyAction, Phase, Suspension};
    use pretty_assertions::assert_eq;
    use schema::{Buttons, SummaryScreenStyle};

    #[test]
    fn test_a_opens_full_menu_for_party_member() {
        let mut host = MockHost::new();
        let mut mons = full_party();
        let mut screen = browsing_screen(&mut host, &mut mons);

        press(&mut screen, &mut host, Buttons::A);

        let all = vec![
            PartyAction::Summary,
            PartyAction::Switch,
            PartyAction::GiveItem,
            PartyAction::TakeItem,
        ];
        assert_eq!(
            host.last_scene().menu,
            Some(MenuView {
                actions: all.clone(),
                cursor: 0
            })
        );
        assert_eq!(
            screen.events().events().last(),
            Some(&ScreenEvent::ActionMenuOpened {
                slot: 0,
                actions: all
            })
        );
    }

    #[test]
    fn test_cursor_is_clamped() {
        let mut host = MockHost::new();
        let mut mons = full_party();
        let mut screen = browsing_screen(&mut host, &mut mons);

        press(&mut screen, &mut host, Buttons::A);
        press(&mut screen, &mut host, Buttons::UP);
        assert_eq!(host.last_scene().menu.as_ref().unwrap().cursor, 0);

        for _ in 0..5 {
            press(&mut screen, &mut host, Buttons::DOWN);
        }
        assert_eq!(host.last_scene().menu.as_ref().unwrap().cursor, 3);

        press(&mut screen, &mut host, Buttons::UP);
        assert_eq!(host.last_scene().menu.as_ref().unwrap().cursor, 2);
    }

    #[test]
    fn test_b_cancels_menu() {
        let mut host = MockHost::new();
        let mut mons = full_party();
        let mut screen = browsing_screen(&mut host, &mut mons);

        press(&mut screen, &mut host, Buttons::A);
        press(&mut screen, &mut host, Buttons::B);

        assert_eq!(screen.phase(), &Phase::Browsing);
        assert_eq!(host.last_scene().menu, None);
        assert!(!screen.is_closed());
        assert_eq!(
            screen.events().events().last(),
            Some(&ScreenEvent::ActionMenuCancelled { slot: 0 })
        );
    }

    #[test]
    fn test_menu_blocks_navigation() {
        let mut host = MockHost::new();
        let mut mons = full_party();
        let mut screen = browsing_screen(&mut host, &mut mons);

        press(&mut screen, &mut host, Buttons::A);
        press(&mut screen, &mut host, Buttons::RIGHT);
        assert_eq!(screen.focus(), 0);
    }

    #[test]
    fn test_read_only_menu_has_summary_only() {
        let mut host = MockHost::new();
        let mut mons = full_party();
        let mut screen = open_screen(&mut host, &mut mons, SummaryScreenStyle::ReadOnly);
        finish_loading(&mut screen, &mut host);

        press(&mut screen, &mut host, Buttons::A);
        press(&mut screen, &mut host, Buttons::DOWN);
        assert_eq!(
            host.last_scene().menu,
            Some(MenuView {
                actions: vec![PartyAction::Summary],
                cursor: 0
            })
        );
    }

    #[test]
    fn test_egg_menu_has_no_item_actions() {
        let mut host = MockHost::new();
        let mut mons = vec![
            TestPokemonBuilder::new(1, 5).build(),
            TestPokemonBuilder::new(2, 1).egg().build(),
        ];
        let mut screen = browsing_screen(&mut host, &mut mons);

        press(&mut screen, &mut host, Buttons::RIGHT);
        press(&mut screen, &mut host, Buttons::A);
        assert_eq!(
            host.last_scene().menu.as_ref().unwrap().actions,
            vec![PartyAction::Summary, PartyAction::Switch]
        );
    }

    #[test]
    fn test_summary_suspends_and_requests_detail_pages() {
        let mut host = MockHost::new();
        let mut mons = full_party();
        let party_ptr = mons.as_mut_ptr();
        let mut screen = browsing_screen(&mut host, &mut mons);

        press(&mut screen, &mut host, Buttons::RIGHT);
        press(&mut screen, &mut host, Buttons::RIGHT);
        press(&mut screen, &mut host, Buttons::A);
        let presented = host.scenes.len();
        press(&mut screen, &mut host, Buttons::A);

        assert_eq!(screen.phase(), &Phase::Suspended(Suspension::Detail));
        assert_eq!(host.scenes.len(), presented, "suspended frame draws nothing");
        assert_eq!(host.detail_requests.len(), 1);
        let request = host.detail_requests[0];
        assert_eq!(request.index, 2);
        assert_eq!(request.last_index, 5);
        assert_eq!(request.style, SummaryScreenStyle::Party);
        assert_eq!(request.party, party_ptr);

        press(&mut screen, &mut host, Buttons::B);
        assert_eq!(screen.phase(), &Phase::Suspended(Suspension::Detail));
        assert!(host.returned_to.is_empty());
    }
}
