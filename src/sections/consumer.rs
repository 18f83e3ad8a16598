//! Section 6: access-key lookup, authority message and consumer data.

use super::Section;
use crate::components::{Component, Text};
use crate::config::RenderConfig;
use crate::document::{Address, FiscalDocument, TaxId};
use crate::format::{mask_access_key, mask_cnpj, mask_cpf};
use crate::ir::{Justification, Op};

pub const ANONYMOUS_CONSUMER: &str = "CONSUMIDOR NÃO IDENTIFICADO";

/// Where and how to look the document up, then who bought.
pub struct ConsumerInfo;

/// The two address lines printed for an identified consumer.
///
/// The first is `street, number`; the second joins complement, district and
/// `city - state` (the latter only when both are present). Empty lines are
/// `None`.
fn address_lines(address: &Address) -> (Option<String>, Option<String>) {
    let first = format!("{}, {}", address.street, address.number).trim().to_string();
    let first = (first != ",").then_some(first);

    let mut second = String::new();
    if !address.complement.is_empty() {
        second.push_str(&format!("{}, ", address.complement));
    }
    if !address.district.is_empty() {
        second.push_str(&format!("{}. ", address.district));
    }
    if !address.city.is_empty() && !address.state.is_empty() {
        second.push_str(&format!("{} - {}", address.city, address.state));
    }
    let second = second.trim_end().to_string();

    (first, (!second.is_empty()).then_some(second))
}

impl Section for ConsumerInfo {
    fn emit(&self, doc: &FiscalDocument, config: &RenderConfig, ops: &mut Vec<Op>) {
        let width = config.columns;
        let line = |text: String| Text::new(text).wrap(width).spaced();

        ops.push(Op::SetJustification(Justification::Center));

        line("Consulte pela chave de acesso em".into()).emit(ops);
        line(doc.supplement.query_url.clone()).emit(ops);
        line(mask_access_key(&doc.supplement.access_key)).emit(ops);

        if let Some(protocol) = &doc.protocol {
            let message = protocol.message.trim();
            if !message.is_empty() {
                Text::new("INFORMAÇÕES ADICIONAIS").bold().spaced().emit(ops);
                line(message.to_string()).emit(ops);
                ops.push(Op::Feed(1));
            }
        }

        let Some(consumer) = &doc.consumer else {
            Text::new(ANONYMOUS_CONSUMER).bold().wrap(width).spaced().emit(ops);
            return;
        };

        match &consumer.tax_id {
            Some(TaxId::Cnpj(cnpj)) => line(format!("CONSUMIDOR CNPJ: {}", mask_cnpj(cnpj))).emit(ops),
            Some(TaxId::Cpf(cpf)) => line(format!("CONSUMIDOR CPF: {}", mask_cpf(cpf))).emit(ops),
            None => {}
        }
        if let Some(foreign_id) = &consumer.foreign_id {
            line(format!("CONSUMIDOR ID. ESTRANGEIRO: {}", foreign_id)).emit(ops);
        }
        if let Some(name) = &consumer.name {
            line(name.clone()).emit(ops);
        }

        if let Some(address) = &consumer.address {
            let (first, second) = address_lines(address);
            for text in [first, second].into_iter().flatten() {
                line(text).emit(ops);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{Consumer, Protocol};
    use crate::sections::fixtures::{document, lines};
    use pretty_assertions::assert_eq;

    const KEY: &str = "3524 0111 2223 3300 0181 6500 1000 0001 2310 0000 1234";

    #[test]
    fn test_anonymous_consumer() {
        let ops = ConsumerInfo.render(&document(), &RenderConfig::default().columns(64));
        assert_eq!(
            lines(&ops),
            vec![
                "Consulte pela chave de acesso em",
                "www.nfce.fazenda.sp.gov.br/consulta",
                KEY,
                ANONYMOUS_CONSUMER,
            ]
        );
        let n = ops.len();
        assert_eq!(ops[n - 3], Op::SetEmphasis(true));
        assert_eq!(ops[n - 1], Op::SetEmphasis(false));
    }

    #[test]
    fn test_access_key_wraps_between_groups() {
        let ops = ConsumerInfo.render(&document(), &RenderConfig::default());
        let lines = lines(&ops);
        assert_eq!(lines[2], "3524 0111 2223 3300 0181 6500 1000 0001 2310");
        assert_eq!(lines[3], "0000 1234");
    }

    #[test]
    fn test_authority_message() {
        let mut doc = document();
        doc.protocol = Some(Protocol {
            message: "  Rejeicao em lote anterior  ".into(),
            ..Default::default()
        });
        let ops = ConsumerInfo.render(&doc, &RenderConfig::default().columns(64));
        let lines = lines(&ops);
        assert_eq!(lines[3], "INFORMAÇÕES ADICIONAIS");
        assert_eq!(lines[4], "Rejeicao em lote anterior");
        assert!(ops.contains(&Op::Feed(1)));
    }

    #[test]
    fn test_identified_consumer() {
        let mut doc = document();
        doc.consumer = Some(Consumer {
            tax_id: Some(TaxId::Cpf("12345678901".into())),
            foreign_id: Some("AB123456".into()),
            name: Some("MARIA DA SILVA".into()),
            address: Some(Address {
                street: "AV PAULISTA".into(),
                number: "1000".into(),
                complement: "AP 12".into(),
                district: "BELA VISTA".into(),
                city: "SAO PAULO".into(),
                state: "SP".into(),
                ..Default::default()
            }),
        });
        let ops = ConsumerInfo.render(&doc, &RenderConfig::default().columns(64));
        assert_eq!(
            lines(&ops)[3..].to_vec(),
            vec![
                "CONSUMIDOR CPF: 123.456.789-01",
                "CONSUMIDOR ID. ESTRANGEIRO: AB123456",
                "MARIA DA SILVA",
                "AV PAULISTA, 1000",
                "AP 12, BELA VISTA. SAO PAULO - SP",
            ]
        );
        assert!(!ops.contains(&Op::SetEmphasis(true)));
    }

    #[test]
    fn test_company_consumer_without_address() {
        let mut doc = document();
        doc.consumer = Some(Consumer {
            tax_id: Some(TaxId::Cnpj("11222333000181".into())),
            ..Default::default()
        });
        let ops = ConsumerInfo.render(&doc, &RenderConfig::default().columns(64));
        assert_eq!(lines(&ops)[3..].to_vec(), vec!["CONSUMIDOR CNPJ: 11.222.333/0001-81"]);
    }

    #[test]
    fn test_address_lines() {
        assert_eq!(address_lines(&Address::default()), (None, None));

        let partial = Address {
            district: "CENTRO".into(),
            city: "CAMPINAS".into(),
            ..Default::default()
        };
        assert_eq!(address_lines(&partial), (None, Some("CENTRO.".to_string())));
    }
}
