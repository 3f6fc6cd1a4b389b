//! Property-Based Tests for Usage Report Construction
//!
//! These tests check the trigger register wire contract and the usage
//! report inclusion rules over generated inputs.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use std::time::{Duration, SystemTime};

    use crate::ie::{Ie, IeType};
    use crate::measure::{DurationMeasure, MeasureInformation, MeasureMethod, VolumeMeasure};
    use crate::report::{UsaReport, UsageReportContext};
    use crate::trigger::{ReportingTrigger, UsageReportTrigger};

    fn arb_method() -> impl Strategy<Value = MeasureMethod> {
        any::<u8>().prop_map(MeasureMethod::decode)
    }

    fn arb_information() -> impl Strategy<Value = MeasureInformation> {
        any::<u8>().prop_map(MeasureInformation::decode)
    }

    fn arb_report() -> impl Strategy<Value = UsaReport> {
        (
            any::<u32>(),
            any::<u32>(),
            any::<u32>(),
            any::<[u64; 6]>(),
            0u64..1_000_000,
            0u64..4_000_000_000,
            prop::option::of(any::<u32>()),
        )
            .prop_map(|(urr_id, ur_seqn, trigger, c, secs, start, query)| {
                let mut r = UsaReport::new(urr_id, ur_seqn, UsageReportTrigger::from_bits(trigger));
                r.volume_measure = VolumeMeasure::new(c[0], c[1], c[2], c[3], c[4], c[5]);
                r.duration_measure = DurationMeasure::from_secs(secs);
                r.query_urr_ref = query;
                r.start_time = SystemTime::UNIX_EPOCH + Duration::from_secs(start);
                r.end_time = r.start_time + Duration::from_secs(secs);
                r
            })
    }

    fn has(ies: &[Ie], ie_type: IeType) -> bool {
        ies.iter().any(|ie| ie.ie_type() == ie_type)
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(256))]

        #[test]
        fn prop_usage_report_trigger_wire_truncates_to_24_bits(v in any::<u32>()) {
            let t = UsageReportTrigger::from_bits(v);
            let decoded = UsageReportTrigger::decode(&t.encode()).unwrap();
            prop_assert_eq!(decoded.bits(), v & 0x00ff_ffff);
        }

        #[test]
        fn prop_reporting_trigger_wire_truncates_to_24_bits(v in any::<u32>()) {
            let t = ReportingTrigger::from_bits(v);
            let encoded = t.encode();
            prop_assert_eq!(encoded.len(), 3);
            let decoded = ReportingTrigger::decode(&encoded).unwrap();
            prop_assert_eq!(decoded.bits(), v & 0x00ff_ffff);
        }

        #[test]
        fn prop_two_octet_decode_matches_low_16_bits(v in any::<u16>()) {
            let bytes = v.to_le_bytes();
            let t = UsageReportTrigger::decode(&bytes).unwrap();
            prop_assert_eq!(t.bits(), v as u32);
        }

        #[test]
        fn prop_timestamps_follow_trigger(
            mut report in arb_report(),
            method in arb_method(),
            info in arb_information(),
        ) {
            let no_times = report.usar_trigger.start()
                || report.usar_trigger.stopt()
                || report.usar_trigger.macar();
            let ies = report.ies(&method, &info);
            prop_assert_eq!(has(&ies, IeType::StartTime), !no_times);
            prop_assert_eq!(has(&ies, IeType::EndTime), !no_times);
        }

        #[test]
        fn prop_mandatory_ies_lead(
            mut report in arb_report(),
            method in arb_method(),
            info in arb_information(),
        ) {
            let urr_id = report.urr_id;
            let ur_seqn = report.ur_seqn;
            let trigger = report.usar_trigger;
            let ies = report.ies(&method, &info);
            prop_assert_eq!(&ies[0], &Ie::UrrId(urr_id));
            prop_assert_eq!(&ies[1], &Ie::UrSeqn(ur_seqn));
            prop_assert_eq!(&ies[2], &Ie::UsageReportTrigger(trigger));
        }

        #[test]
        fn prop_contexts_produce_identical_children(
            report in arb_report(),
            method in arb_method(),
            info in arb_information(),
        ) {
            let mut srr = report.clone();
            let mut smr = report.clone();
            let mut sdr = report;
            let a = srr.grouped_ie(UsageReportContext::SessionReportRequest, &method, &info);
            let b = smr.grouped_ie(UsageReportContext::SessionModificationResponse, &method, &info);
            let c = sdr.grouped_ie(UsageReportContext::SessionDeletionResponse, &method, &info);
            prop_assert_eq!(a.children(), b.children());
            prop_assert_eq!(b.children(), c.children());
        }

        #[test]
        fn prop_method_gating_and_order(
            mut report in arb_report(),
            method in arb_method(),
            info in arb_information(),
        ) {
            let mut expected = vec![IeType::UrrId, IeType::UrSeqn, IeType::UsageReportTrigger];
            if report.usar_trigger.requires_timestamps() {
                expected.push(IeType::StartTime);
                expected.push(IeType::EndTime);
            }
            if method.volum {
                expected.push(IeType::VolumeMeasurement);
            }
            if method.durat {
                expected.push(IeType::DurationMeasurement);
            }

            let ies = report.ies(&method, &info);
            let types: Vec<IeType> = ies.iter().map(Ie::ie_type).collect();
            prop_assert_eq!(types, expected);
        }

        #[test]
        fn prop_volume_flags_only_accumulate(calls in prop::collection::vec(any::<bool>(), 1..8)) {
            let mut vm = VolumeMeasure::default();
            let mut previous = 0u8;
            for mnop in &calls {
                vm.finalize_flags(*mnop);
                prop_assert_eq!(vm.flags() & previous, previous);
                previous = vm.flags();
            }
            let expected = if calls.iter().any(|m| *m) { 0x3f } else { 0x07 };
            prop_assert_eq!(vm.flags(), expected);
        }
    }
}
