//! Sections 1 and 2: emitter identification and document title.

use super::Section;
use crate::components::{Component, Text};
use crate::config::RenderConfig;
use crate::document::FiscalDocument;
use crate::format::{mask_cnpj, mask_phone, mask_zip};
use crate::ir::{Justification, Op};

/// Fixed title of every DANFCE.
pub const TITLE: &str = "DOCUMENTO AUXILIAR DA NOTA FISCAL DE CONSUMIDOR ELETRÔNICA";

/// Logo, trade name, legal name, tax ids and address, centered.
pub struct Header;

impl Section for Header {
    fn emit(&self, doc: &FiscalDocument, config: &RenderConfig, ops: &mut Vec<Op>) {
        let emitter = &doc.emitter;
        let address = &emitter.address;
        let width = config.columns;

        ops.push(Op::SetJustification(Justification::Center));

        if let Some(logo) = &config.logo {
            ops.push(Op::Image(logo.clone()));
        }

        if !emitter.trade_name.is_empty() {
            Text::new(&emitter.trade_name).bold().wrap(width).emit(ops);
        }
        if !emitter.legal_name.is_empty() {
            Text::new(&emitter.legal_name).wrap(width).emit(ops);
        }

        let cnpj = format!("CNPJ: {}", mask_cnpj(&emitter.tax_id));
        if emitter.state_registration.is_empty() {
            Text::new(cnpj).wrap(width).emit(ops);
        } else {
            let ie = format!("IE: {}", emitter.state_registration);
            let ids = format!("{}  {}", cnpj, ie);
            if ids.chars().count() <= width {
                Text::new(ids).emit(ops);
            } else {
                Text::new(cnpj).wrap(width).emit(ops);
                Text::new(ie).wrap(width).emit(ops);
            }
        }

        let mut street = format!("{}, {}", address.street, address.number);
        if !address.complement.is_empty() {
            street.push_str(&format!(" - {}", address.complement));
        }
        Text::new(street).wrap(width).emit(ops);

        let mut city = format!("{} - {}/{}", address.district, address.city, address.state);
        if !address.zip.is_empty() {
            city.push_str(&format!(" - CEP: {}", mask_zip(&address.zip)));
        }
        let phone = mask_phone(&address.phone);
        if !phone.is_empty() {
            city.push_str(&format!(" - Fone: {}", phone));
        }
        Text::new(city).wrap(width).emit(ops);

        ops.push(Op::SetJustification(Justification::Left));
    }
}

/// The centered document title.
pub struct Title;

impl Section for Title {
    fn emit(&self, _doc: &FiscalDocument, config: &RenderConfig, ops: &mut Vec<Op>) {
        ops.push(Op::SetJustification(Justification::Center));
        Text::new(TITLE).wrap(config.columns).spaced().emit(ops);
        ops.push(Op::SetJustification(Justification::Left));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logo::Logo;
    use crate::sections::fixtures::{document, lines};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_header_lines() {
        let ops = Header.render(&document(), &RenderConfig::default());
        assert_eq!(
            lines(&ops),
            vec![
                "PADARIA MODELO",
                "PADARIA MODELO LTDA",
                "CNPJ: 11.222.333/0001-81  IE: 123456789",
                "RUA DAS FLORES, 100",
                "CENTRO - SAO PAULO/SP - CEP: 01310-100 - Fone:",
                "(11) 3333-4444",
            ]
        );
        assert_eq!(ops.first(), Some(&Op::SetJustification(Justification::Center)));
        assert_eq!(ops.last(), Some(&Op::SetJustification(Justification::Left)));
    }

    #[test]
    fn test_trade_name_is_emphasized() {
        let ops = Header.render(&document(), &RenderConfig::default());
        assert_eq!(ops[1], Op::SetEmphasis(true));
        assert_eq!(ops[2], Op::Text("PADARIA MODELO\n".into()));
        assert_eq!(ops[3], Op::SetEmphasis(false));
    }

    #[test]
    fn test_optional_parts_are_omitted() {
        let mut doc = document();
        doc.emitter.trade_name.clear();
        doc.emitter.state_registration.clear();
        doc.emitter.address.complement.clear();
        doc.emitter.address.zip.clear();
        doc.emitter.address.phone = "123".into();

        let ops = Header.render(&doc, &RenderConfig::default());
        assert_eq!(
            lines(&ops),
            vec![
                "PADARIA MODELO LTDA",
                "CNPJ: 11.222.333/0001-81",
                "RUA DAS FLORES, 100",
                "CENTRO - SAO PAULO/SP",
            ]
        );
        assert!(!ops.contains(&Op::SetEmphasis(true)));
    }

    #[test]
    fn test_complement_and_logo() {
        let mut doc = document();
        doc.emitter.address.complement = "LOJA 2".into();
        let logo = Logo {
            width: 8,
            height: 1,
            data: vec![0xFF],
        };
        let config = RenderConfig::default().logo(logo.clone());

        let ops = Header.render(&doc, &config);
        assert_eq!(ops[1], Op::Image(logo));
        assert!(lines(&ops).contains(&"RUA DAS FLORES, 100 - LOJA 2".to_string()));
    }

    #[test]
    fn test_narrow_paper_splits_tax_ids() {
        let ops = Header.render(&document(), &RenderConfig::default().columns(32));
        let lines = lines(&ops);
        assert_eq!(lines[2..4].to_vec(), vec!["CNPJ: 11.222.333/0001-81", "IE: 123456789"]);
        for line in &lines {
            assert!(line.chars().count() <= 32, "{:?} is {} wide", line, line.chars().count());
        }
    }

    #[test]
    fn test_title_wraps_on_narrow_paper() {
        let ops = Title.render(&document(), &RenderConfig::default().columns(32));
        assert_eq!(
            lines(&ops),
            vec!["DOCUMENTO AUXILIAR DA NOTA", "FISCAL DE CONSUMIDOR ELETRÔNICA"]
        );
    }
}
