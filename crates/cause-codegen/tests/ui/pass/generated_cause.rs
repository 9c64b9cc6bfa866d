#[allow(non_upper_case_globals, dead_code)]
mod ngap_type {
    include!("../../fixtures/ngap_type/cause.rs");
    include!("../../fixtures/ngap_type/cause_misc.rs");
    include!("../../fixtures/ngap_type/cause_nas.rs");
    include!("../../fixtures/ngap_type/cause_protocol.rs");
    include!("../../fixtures/ngap_type/cause_radio_network.rs");
    include!("../../fixtures/ngap_type/cause_transport.rs");
    include!("../../fixtures/ngap_type/protocol_ie_single_container.rs");
}

include!("../generated/cause_error_str.rs");

use ngap_type::*;

fn main() {
    assert_eq!(cause_error_str(None), "unknown ngap_type.Cause");

    let cause = Cause {
        present: CausePresentTransport,
        transport: Some(Box::new(CauseTransport {
            value: CauseTransportPresentUnspecified,
        })),
        ..Cause::default()
    };
    assert_eq!(cause_error_str(Some(&cause)), "Transport : Unspecified");

    let cause = Cause {
        present: CausePresentRadioNetwork,
        radio_network: Some(Box::new(CauseRadioNetwork { value: 42 })),
        ..Cause::default()
    };
    assert_eq!(cause_error_str(Some(&cause)), "unknown cause");

    let cause = Cause {
        present: CausePresentMisc,
        ..Cause::default()
    };
    assert_eq!(cause_error_str(Some(&cause)), "unknown cause");

    let cause = Cause {
        present: CausePresentNas,
        nas: Some(Box::new(CauseNas { value: 3 })),
        ..Cause::default()
    };
    assert_eq!(cause_error_str(Some(&cause)), "Nas : Unknown error");

    let cause = Cause {
        present: CausePresentNothing,
        ..Cause::default()
    };
    assert_eq!(cause_error_str(Some(&cause)), "unknown ngap_type.Cause");
}
