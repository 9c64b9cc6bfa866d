// Code generated by cause-codegen; DO NOT EDIT.
fn cause_radio_network_error_str (variant : Option < & crate :: ngap_type :: CauseRadioNetwork >) -> & 'static str { let Some (variant) = variant else { return "unknown cause" ; } ; match variant . value { crate :: ngap_type :: CauseRadioNetworkPresentUnspecified => "RadioNetwork : Unspecified" , crate :: ngap_type :: CauseRadioNetworkPresentTxnrelocoverallExpiry => "RadioNetwork : TxnrelocoverallExpiry" , crate :: ngap_type :: CauseRadioNetworkPresentSuccessfulHandover => "RadioNetwork : SuccessfulHandover" , crate :: ngap_type :: CauseRadioNetworkPresentReleaseDueToNgranGeneratedReason => "RadioNetwork : ReleaseDueToNgranGeneratedReason" , crate :: ngap_type :: CauseRadioNetworkPresentHandoverCancelled => "RadioNetwork : HandoverCancelled" , crate :: ngap_type :: CauseRadioNetworkPresentUnknownPDUSessionID => "RadioNetwork : UnknownPDUSessionID" , _ => "unknown cause" , } } fn cause_transport_error_str (variant : Option < & crate :: ngap_type :: CauseTransport >) -> & 'static str { let Some (variant) = variant else { return "unknown cause" ; } ; match variant . value { crate :: ngap_type :: CauseTransportPresentTransportResourceUnavailable => "Transport : TransportResourceUnavailable" , crate :: ngap_type :: CauseTransportPresentUnspecified => "Transport : Unspecified" , _ => "unknown cause" , } } fn cause_nas_error_str (_variant : Option < & crate :: ngap_type :: CauseNas >) -> & 'static str { "Nas : Unknown error" } fn cause_protocol_error_str (variant : Option < & crate :: ngap_type :: CauseProtocol >) -> & 'static str { let Some (variant) = variant else { return "unknown cause" ; } ; match variant . value { crate :: ngap_type :: CauseProtocolPresentTransferSyntaxError => "Protocol : TransferSyntaxError" , crate :: ngap_type :: CauseProtocolPresentAbstractSyntaxErrorReject => "Protocol : AbstractSyntaxErrorReject" , crate :: ngap_type :: CauseProtocolPresentSemanticError => "Protocol : SemanticError" , crate :: ngap_type :: CauseProtocolPresentUnspecified => "Protocol : Unspecified" , _ => "unknown cause" , } } fn cause_misc_error_str (variant : Option < & crate :: ngap_type :: CauseMisc >) -> & 'static str { let Some (variant) = variant else { return "unknown cause" ; } ; match variant . value { crate :: ngap_type :: CauseMiscPresentControlProcessingOverload => "Misc : ControlProcessingOverload" , crate :: ngap_type :: CauseMiscPresentNotEnoughUserPlaneProcessingResources => "Misc : NotEnoughUserPlaneProcessingResources" , crate :: ngap_type :: CauseMiscPresentHardwareFailure => "Misc : HardwareFailure" , crate :: ngap_type :: CauseMiscPresentOmIntervention => "Misc : OmIntervention" , crate :: ngap_type :: CauseMiscPresentUnknownPLMN => "Misc : UnknownPLMN" , crate :: ngap_type :: CauseMiscPresentUnspecified => "Misc : Unspecified" , _ => "unknown cause" , } } fn cause_choice_extensions_error_str (_variant : Option < & crate :: ngap_type :: ProtocolIeSingleContainerCauseExtIes >) -> & 'static str { "ChoiceExtensions : Unknown error" } pub fn cause_error_str (cause : Option < & crate :: ngap_type :: Cause >) -> & 'static str { let Some (cause) = cause else { return "unknown ngap_type.Cause" ; } ; match cause . present { crate :: ngap_type :: CausePresentRadioNetwork => cause_radio_network_error_str (cause . radio_network . as_deref ()) , crate :: ngap_type :: CausePresentTransport => cause_transport_error_str (cause . transport . as_deref ()) , crate :: ngap_type :: CausePresentNas => cause_nas_error_str (cause . nas . as_deref ()) , crate :: ngap_type :: CausePresentProtocol => cause_protocol_error_str (cause . protocol . as_deref ()) , crate :: ngap_type :: CausePresentMisc => cause_misc_error_str (cause . misc . as_deref ()) , crate :: ngap_type :: CausePresentChoiceExtensions => cause_choice_extensions_error_str (cause . choice_extensions . as_deref ()) , _ => "unknown ngap_type.Cause" , } }
