//! Sections 5, 7 and 8: fiscal notices, authorization and tax disclosure.

use tracing::debug;

use super::Section;
use crate::components::{Component, Divider, Text};
use crate::config::RenderConfig;
use crate::document::FiscalDocument;
use crate::format::{currency, digits, format_timestamp};
use crate::ir::{Justification, Op, QrErrorLevel};

pub const HOMOLOGATION_NOTICE: &str = "EMITIDA EM AMBIENTE DE HOMOLOGAÇÃO - SEM VALOR FISCAL";
pub const CONTINGENCY_NOTICE: &str = "EMITIDA EM CONTINGÊNCIA";
pub const NO_PROTOCOL_NOTICE: &str = "NOTA FISCAL INVÁLIDA - SEM PROTOCOLO";
pub const IBPT_SOURCE: &str = "Fonte IBPT - Lei Federal 12.741/2012";

/// Module size of the consultation QR code, in printer dots.
const QR_MODULE_SIZE: u8 = 6;

// ============================================================================
// Notices
// ============================================================================

/// Homologation and contingency warnings, closed by a rule.
pub struct Notices;

impl Section for Notices {
    fn emit(&self, doc: &FiscalDocument, config: &RenderConfig, ops: &mut Vec<Op>) {
        ops.push(Op::SetJustification(Justification::Center));

        if doc.environment.is_homologation {
            Text::new(HOMOLOGATION_NOTICE).bold().wrap(config.columns).spaced().emit(ops);
        }
        if doc.environment.is_contingency {
            Text::new(CONTINGENCY_NOTICE).bold().wrap(config.columns).spaced().emit(ops);
        }

        Divider::new(config.columns).emit(ops);
    }
}

// ============================================================================
// Protocol and QR code
// ============================================================================

/// Number, series and issue time, the authorization protocol and the QR code.
pub struct ProtocolQr;

impl Section for ProtocolQr {
    fn emit(&self, doc: &FiscalDocument, config: &RenderConfig, ops: &mut Vec<Op>) {
        let ide = &doc.identification;
        let width = config.columns;

        ops.push(Op::SetJustification(Justification::Center));

        let identification = format!(
            "NFC-e nº {:0>9} | Série {:0>3} | {}",
            digits(&ide.number),
            digits(&ide.series),
            format_timestamp(&ide.issued_at)
        );
        Text::new(identification).bold().wrap(width).spaced().emit(ops);

        match &doc.protocol {
            Some(protocol) => {
                if !protocol.number.is_empty() {
                    Text::new(format!("Protocolo de autorização: {}", protocol.number))
                        .wrap(width)
                        .spaced()
                        .emit(ops);
                }
                if !protocol.received_at.is_empty() {
                    Text::new(format!(
                        "Data de autorização: {}",
                        format_timestamp(&protocol.received_at)
                    ))
                    .wrap(width)
                    .spaced()
                    .emit(ops);
                }
            }
            None => {
                Text::new(NO_PROTOCOL_NOTICE).bold().wrap(width).spaced().emit(ops);
            }
        }

        ops.push(Op::Feed(1));

        let payload = doc.supplement.qr_payload.trim();
        if payload.is_empty() {
            debug!("no QR code payload, skipping QR code");
            return;
        }
        ops.push(Op::SetJustification(Justification::Center));
        ops.push(Op::QrCode {
            payload: payload.to_string(),
            error_level: QrErrorLevel::L,
            module_size: QR_MODULE_SIZE,
        });
        ops.push(Op::Feed(1));
    }
}

// ============================================================================
// Tax disclosure
// ============================================================================

/// Approximate tax burden (Lei 12.741/2012).
pub struct TaxDisclosure;

impl Section for TaxDisclosure {
    fn emit(&self, doc: &FiscalDocument, config: &RenderConfig, ops: &mut Vec<Op>) {
        ops.push(Op::SetJustification(Justification::Center));
        Text::new(format!(
            "Informação dos Tributos: R$ {}",
            currency(doc.totals.estimated_tax, 2)
        ))
        .wrap(config.columns)
        .spaced()
        .emit(ops);
        Text::new(IBPT_SOURCE).wrap(config.columns).spaced().emit(ops);
    }
}
