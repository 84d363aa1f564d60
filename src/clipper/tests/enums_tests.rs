use crate::clipper::enums::{ClipType, Phase, PolyFillType, PolyType, Winding};
use num_traits::Zero;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_rules() {
        let winds = [-2, -1, 0, 1, 2, 3];

        let even_odd: Vec<bool> = winds.iter().map(|&w| PolyFillType::EvenOdd.is_filled(w)).collect();
        let non_zero: Vec<bool> = winds.iter().map(|&w| PolyFillType::NonZero.is_filled(w)).collect();
        let positive: Vec<bool> = winds.iter().map(|&w| PolyFillType::Positive.is_filled(w)).collect();
        let negative: Vec<bool> = winds.iter().map(|&w| PolyFillType::Negative.is_filled(w)).collect();

        assert_eq!(even_odd, vec![false, true, false, true, false, true]);
        assert_eq!(non_zero, vec![true, true, false, true, true, true]);
        assert_eq!(positive, vec![false, false, false, true, true, true]);
        assert_eq!(negative, vec![true, true, false, false, false, false]);
    }

    #[test]
    fn test_clip_type_truth_tables() {
        let cases = [(false, false), (false, true), (true, false), (true, true)];
        let table = |clip_type: ClipType| -> Vec<bool> {
            cases.iter().map(|&(s, c)| clip_type.contains(s, c)).collect()
        };

        assert_eq!(table(ClipType::Intersection), vec![false, false, false, true]);
        assert_eq!(table(ClipType::Union), vec![false, true, true, true]);
        assert_eq!(table(ClipType::Difference), vec![false, false, true, false]);
        assert_eq!(table(ClipType::Xor), vec![false, true, true, false]);
    }

    #[test]
    fn test_phase_transitions() {
        assert!(Phase::Idle.can_advance_to(Phase::Preprocessing));
        assert!(Phase::Preprocessing.can_advance_to(Phase::Sweeping));
        assert!(Phase::Sweeping.can_advance_to(Phase::Reconstructing));
        assert!(Phase::Reconstructing.can_advance_to(Phase::Done));
        assert!(Phase::Preprocessing.can_advance_to(Phase::Failed));
        assert!(Phase::Sweeping.can_advance_to(Phase::Failed));

        assert!(!Phase::Idle.can_advance_to(Phase::Sweeping));
        assert!(!Phase::Reconstructing.can_advance_to(Phase::Failed));
        assert!(!Phase::Done.can_advance_to(Phase::Preprocessing));
        assert!(!Phase::Failed.can_advance_to(Phase::Sweeping));
    }

    #[test]
    fn test_winding_arithmetic() {
        let subject = Winding::unit(PolyType::Subject, 1);
        let clip = Winding::unit(PolyType::Clip, -1);

        assert_eq!(subject + clip, Winding::new(1, -1));
        assert_eq!(subject - clip, Winding::new(1, 1));
        assert_eq!(-subject, Winding::new(-1, 0));
        assert!((subject - subject).is_zero());
        assert_eq!(Winding::zero(), Winding::default());
    }

    #[test]
    fn test_winding_is_filled() {
        let wind = Winding::new(1, 0);
        assert!(wind.is_filled(ClipType::Union, PolyFillType::NonZero, PolyFillType::NonZero));
        assert!(!wind.is_filled(ClipType::Intersection, PolyFillType::NonZero, PolyFillType::NonZero));
        assert!(wind.is_filled(ClipType::Difference, PolyFillType::Positive, PolyFillType::Positive));
        assert!(!wind.is_filled(ClipType::Union, PolyFillType::Negative, PolyFillType::Negative));
    }
}
