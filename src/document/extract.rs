//! Projection of the NFC-e XML tree into [`FiscalDocument`].
//!
//! Paths follow the national NFC-e layout. The tree may be the bare `NFe`
//! element or the `nfeProc` envelope carrying `NFe` + `protNFe`.

use rust_decimal::Decimal;
use tracing::{debug, warn};

use super::xml::{EMPTY_NODE, XmlNode};
use super::{
    AdditionalInfo, Address, Consumer, Emitter, Environment, FiscalDocument, Identification, Item,
    Payment, Protocol, Supplement, TaxId, Totals,
};

/// Emission mode (`tpEmis`) for normal, online authorization.
const EMISSION_NORMAL: u8 = 1;
/// Environment (`tpAmb`) value for the homologation (test) environment.
const ENVIRONMENT_HOMOLOGATION: u8 = 2;

pub(super) fn project(root: &XmlNode) -> FiscalDocument {
    let envelope = root.child("protNFe");
    let nfe = match envelope {
        Some(_) => root.child("NFe").unwrap_or(&EMPTY_NODE),
        None => root.child("NFe").unwrap_or(root),
    };
    let inf = nfe.child("infNFe").unwrap_or(&EMPTY_NODE);

    let protocol = envelope.and_then(|p| p.child("infProt")).map(protocol);
    if protocol.is_none() {
        warn!("NFC-e has no authorization protocol");
    }

    let items: Vec<Item> = inf
        .children_named("det")
        .enumerate()
        .map(|(i, det)| item(i + 1, det))
        .collect();

    let (payments, change) = payments(inf);

    let doc = FiscalDocument {
        emitter: emitter(inf),
        identification: Identification {
            number: inf.text_at("ide/nNF"),
            series: inf.text_at("ide/serie"),
            issued_at: inf.text_at("ide/dhEmi"),
        },
        environment: environment(inf),
        items,
        totals: totals(inf),
        payments,
        change,
        consumer: inf.child("dest").map(consumer),
        supplement: Supplement {
            query_url: nfe.text_at("infNFeSupl/urlChave"),
            qr_payload: nfe.text_at("infNFeSupl/qrCode"),
            access_key: access_key(inf, envelope),
        },
        additional_info: AdditionalInfo {
            free_text: inf.text_at("infAdic/infCpl"),
        },
        protocol,
    };

    debug!(
        items = doc.item_count(),
        payments = doc.payments.len(),
        identified_consumer = doc.consumer.is_some(),
        "projected NFC-e"
    );
    doc
}

fn decimal(node: &XmlNode, path: &str) -> Decimal {
    node.text_at(path).parse().unwrap_or_default()
}

fn code(node: &XmlNode, path: &str) -> u8 {
    node.text_at(path).parse().unwrap_or_default()
}

fn non_empty(text: String) -> Option<String> {
    if text.is_empty() { None } else { Some(text) }
}

fn address(node: &XmlNode) -> Address {
    Address {
        street: node.text_at("xLgr"),
        number: node.text_at("nro"),
        complement: node.text_at("xCpl"),
        district: node.text_at("xBairro"),
        city: node.text_at("xMun"),
        state: node.text_at("UF"),
        zip: node.text_at("CEP"),
        phone: node.text_at("fone"),
    }
}

fn emitter(inf: &XmlNode) -> Emitter {
    let emit = inf.child("emit").unwrap_or(&EMPTY_NODE);
    Emitter {
        legal_name: emit.text_at("xNome"),
        trade_name: emit.text_at("xFant"),
        tax_id: emit.text_at("CNPJ"),
        state_registration: emit.text_at("IE"),
        address: address(emit.child("enderEmit").unwrap_or(&EMPTY_NODE)),
    }
}

fn environment(inf: &XmlNode) -> Environment {
    Environment {
        is_homologation: code(inf, "ide/tpAmb") == ENVIRONMENT_HOMOLOGATION,
        is_contingency: code(inf, "ide/tpEmis") != EMISSION_NORMAL,
    }
}

fn item(seq: usize, det: &XmlNode) -> Item {
    let prod = det.child("prod").unwrap_or(&EMPTY_NODE);
    Item {
        seq,
        code: prod.text_at("cProd"),
        description: prod.text_at("xProd"),
        quantity: decimal(prod, "qCom"),
        unit: prod.text_at("uCom"),
        unit_price: decimal(prod, "vUnCom"),
        total_price: decimal(prod, "vProd"),
        freight: decimal(prod, "vFrete"),
        discount: decimal(prod, "vDesc"),
        note: det.text_at("infAdProd"),
    }
}

fn totals(inf: &XmlNode) -> Totals {
    let tot = inf.find("total/ICMSTot").unwrap_or(&EMPTY_NODE);
    Totals {
        product_total: decimal(tot, "vProd"),
        freight: decimal(tot, "vFrete"),
        discount: decimal(tot, "vDesc"),
        grand_total: decimal(tot, "vNF"),
        estimated_tax: decimal(tot, "vTotTrib"),
    }
}

/// Payments from every `pag` group. Layout 4.00 nests them in `detPag`;
/// the older 3.10 layout puts `tPag`/`vPag` straight on `pag`.
fn payments(inf: &XmlNode) -> (Vec<Payment>, Decimal) {
    let mut payments = Vec::new();
    let mut change = Decimal::ZERO;

    for pag in inf.children_named("pag") {
        let mut details = pag.children_named("detPag").peekable();
        if details.peek().is_some() {
            payments.extend(details.map(payment));
        } else if pag.child("tPag").is_some() {
            payments.push(payment(pag));
        }

        if change.is_zero() {
            change = decimal(pag, "vTroco");
        }
    }

    (payments, change)
}

fn payment(node: &XmlNode) -> Payment {
    Payment {
        method_code: node.text_at("tPag"),
        amount: decimal(node, "vPag").max(Decimal::ZERO),
        card_brand: non_empty(node.text_at("card/tBand")),
    }
}

fn consumer(dest: &XmlNode) -> Consumer {
    let tax_id = non_empty(dest.text_at("CNPJ"))
        .map(TaxId::Cnpj)
        .or_else(|| non_empty(dest.text_at("CPF")).map(TaxId::Cpf));

    Consumer {
        tax_id,
        foreign_id: non_empty(dest.text_at("idEstrangeiro")),
        name: non_empty(dest.text_at("xNome")),
        address: dest.child("enderDest").map(address),
    }
}

fn protocol(inf_prot: &XmlNode) -> Protocol {
    Protocol {
        number: inf_prot.text_at("nProt"),
        received_at: inf_prot.text_at("dhRecbto"),
        message: inf_prot.text_at("xMsg"),
    }
}

/// `infNFe@Id` without its `NFe` prefix, else the key echoed in the protocol.
fn access_key(inf: &XmlNode, envelope: Option<&XmlNode>) -> String {
    let from_id = inf
        .attribute("Id")
        .map(|id| id.trim().trim_start_matches("NFe").to_string())
        .unwrap_or_default();
    if !from_id.is_empty() {
        return from_id;
    }
    envelope
        .map(|p| p.text_at("infProt/chNFe"))
        .unwrap_or_default()
}
