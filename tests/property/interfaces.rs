use autothreat::attack_surface::{derive_interfaces, interface_id};
use autothreat::types::ConnectionSpec;
use proptest::prelude::*;

fn arb_endpoint() -> impl Strategy<Value = String> {
    "[A-Z][A-Z0-9_]{0,6}"
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    // Interface ids depend only on (source, target).
    #[test]
    fn interface_id_is_pure(
        pairs in prop::collection::vec((arb_endpoint(), arb_endpoint()), 0..6),
        protocol in prop::option::of("[a-z]{1,8}"),
    ) {
        let conns: Vec<ConnectionSpec> = pairs
            .iter()
            .map(|(s, t)| ConnectionSpec {
                source: s.clone(),
                target: t.clone(),
                name: None,
                connection_type: None,
                protocol: protocol.clone(),
                description: None,
            })
            .collect();

        let first = derive_interfaces(&conns);
        let second = derive_interfaces(&conns);
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first.len(), conns.len());
        for (iface, (s, t)) in first.iter().zip(pairs.iter()) {
            prop_assert_eq!(&iface.id, &format!("IF-{}-{}", s, t));
            prop_assert_eq!(&iface.id, &interface_id(s, t));
            prop_assert_eq!(&iface.name, &format!("Interface {}", iface.id));
        }
    }
}
