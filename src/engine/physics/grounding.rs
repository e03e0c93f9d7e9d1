// Ground contact resolution against platform boxes

use crate::core::Rect;

/// Transition signal produced by a grounding pass.
///
/// Fired only on the frame the transition happens, never while the
/// contact state stays the same.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EdgeEvent {
    #[default]
    None,
    /// Was airborne, now touching ground while moving downward
    JustLanded,
    /// Was touching ground, now has no contact
    JustLeftGround,
}

/// Strip sizes used by the contact test
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroundingConfig {
    /// Height of the band at the bottom of the character box
    pub feet_height: f32,
    /// Maximum height of the band at the top of each platform box
    pub platform_top_height: f32,
}

impl Default for GroundingConfig {
    fn default() -> Self {
        Self {
            feet_height: 10.0,
            platform_top_height: 10.0,
        }
    }
}

/// Result of one grounding pass, computed together so the edge can never
/// disagree with the new contact state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroundingOutcome {
    pub grounded: bool,
    pub edge: EdgeEvent,
}

/// Cheap rejection: the full boxes must overlap at all
pub fn boxes_overlap(character: &Rect, platform: &Rect) -> bool {
    character.intersects(platform)
}

/// Authoritative contact: the character's feet band must overlap the
/// platform's top band
pub fn feet_on_platform_top(character: &Rect, platform: &Rect, config: &GroundingConfig) -> bool {
    let feet = character.bottom_strip(config.feet_height);
    let top = platform.top_strip(config.platform_top_height);
    feet.intersects(&top)
}

/// Check whether a single platform supports the character
pub fn is_ground_contact(character: &Rect, platform: &Rect, config: &GroundingConfig) -> bool {
    boxes_overlap(character, platform) && feet_on_platform_top(character, platform, config)
}

/// Resolve ground contact for one frame.
///
/// `character` is the post-movement box. Contact is a disjunction over all
/// platforms, so their order never changes the outcome. A landing is only
/// reported while moving downward (`velocity_y > 0`); touching a platform
/// while rising still counts as grounded but fires no landing.
pub fn resolve_grounding(
    character: &Rect,
    platforms: &[Rect],
    was_grounded: bool,
    velocity_y: f32,
    config: &GroundingConfig,
) -> GroundingOutcome {
    let grounded = platforms
        .iter()
        .any(|platform| is_ground_contact(character, platform, config));

    let edge = match (was_grounded, grounded) {
        (false, true) if velocity_y > 0.0 => EdgeEvent::JustLanded,
        (true, false) => EdgeEvent::JustLeftGround,
        _ => EdgeEvent::None,
    };

    GroundingOutcome { grounded, edge }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player_at(x: f32, y: f32) -> Rect {
        Rect::new(x, y, 50.0, 100.0)
    }

    fn platform() -> Rect {
        Rect::new(0.0, 300.0, 400.0, 200.0)
    }

    #[test]
    fn test_coarse_and_strip_checks_are_independent() {
        let config = GroundingConfig::default();
        // Standing inside the platform's side, far below its top band
        let beside = Rect::new(-25.0, 380.0, 50.0, 100.0);
        assert!(boxes_overlap(&beside, &platform()));
        assert!(!feet_on_platform_top(&beside, &platform(), &config));
        assert!(!is_ground_contact(&beside, &platform(), &config));
    }

    #[test]
    fn test_landing_from_fall() {
        // Feet band 295..305 overlaps top band 300..310
        let character = player_at(100.0, 205.0);
        let outcome =
            resolve_grounding(&character, &[platform()], false, 400.0, &GroundingConfig::default());
        assert!(outcome.grounded);
        assert_eq!(outcome.edge, EdgeEvent::JustLanded);
    }

    #[test]
    fn test_exact_strip_match_lands_once() {
        // Feet band exactly covers the platform's top band
        let character = player_at(100.0, 210.0);
        let config = GroundingConfig::default();

        let first = resolve_grounding(&character, &[platform()], false, 250.0, &config);
        assert_eq!(first.edge, EdgeEvent::JustLanded);

        let second = resolve_grounding(&character, &[platform()], first.grounded, 0.0, &config);
        assert!(second.grounded);
        assert_eq!(second.edge, EdgeEvent::None);
    }

    #[test]
    fn test_rising_contact_is_not_a_landing() {
        let character = player_at(100.0, 205.0);
        let outcome = resolve_grounding(
            &character,
            &[platform()],
            false,
            -800.0,
            &GroundingConfig::default(),
        );
        assert!(outcome.grounded);
        assert_eq!(outcome.edge, EdgeEvent::None);
    }

    #[test]
    fn test_side_graze_is_not_grounded() {
        let character = Rect::new(-25.0, 380.0, 50.0, 100.0);
        let outcome = resolve_grounding(
            &character,
            &[platform()],
            false,
            -300.0,
            &GroundingConfig::default(),
        );
        assert!(!outcome.grounded);
        assert_eq!(outcome.edge, EdgeEvent::None);
    }

    #[test]
    fn test_leaving_ground() {
        let character = player_at(500.0, 205.0);
        let outcome =
            resolve_grounding(&character, &[platform()], true, 0.0, &GroundingConfig::default());
        assert!(!outcome.grounded);
        assert_eq!(outcome.edge, EdgeEvent::JustLeftGround);
    }

    #[test]
    fn test_no_platforms() {
        let outcome = resolve_grounding(
            &player_at(0.0, 0.0),
            &[],
            false,
            100.0,
            &GroundingConfig::default(),
        );
        assert!(!outcome.grounded);
        assert_eq!(outcome.edge, EdgeEvent::None);
    }

    #[test]
    fn test_platform_order_does_not_matter() {
        let character = player_at(100.0, 205.0);
        let far = Rect::new(2000.0, 300.0, 400.0, 200.0);
        let config = GroundingConfig::default();

        let a = resolve_grounding(&character, &[far, platform()], false, 10.0, &config);
        let b = resolve_grounding(&character, &[platform(), far], false, 10.0, &config);
        assert_eq!(a, b);
        assert!(a.grounded);
    }

    #[test]
    fn test_feet_above_platform_do_not_touch() {
        // Feet band ends exactly at the platform top edge
        let character = player_at(100.0, 200.0);
        let outcome =
            resolve_grounding(&character, &[platform()], false, 50.0, &GroundingConfig::default());
        assert!(!outcome.grounded);
    }
}
