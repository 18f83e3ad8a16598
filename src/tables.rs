//! # NFC-e Code Tables
//!
//! Closed lookup tables for the coded fields printed on the receipt.
//! Unknown codes map to an empty label so documents carrying codes issued
//! after this table was written still render.

/// Payment method label for a `tPag` code.
pub fn payment_method(code: &str) -> &'static str {
    match code.trim() {
        "01" => "Dinheiro",
        "02" => "Cheque",
        "03" => "Cartão de Crédito",
        "04" => "Cartão de Débito",
        "05" => "Cartão da Loja (Private Label)",
        "10" => "Vale Alimentação",
        "11" => "Vale Refeição",
        "12" => "Vale Presente",
        "13" => "Vale Combustível",
        "14" => "Duplicata Mercantil",
        "15" => "Boleto Bancário",
        "16" => "Depósito Bancário",
        "17" => "PIX Dinâmico",
        "18" => "Transferência Carteira Digital",
        "19" => "Prog.Fidel., CashBack, Créd.Virt.",
        "20" => "PIX Estático",
        "21" => "Crédito em loja",
        "22" => "Pag.Eletr. Não Informado (Falha de hardware)",
        "90" => "Sem Pagamento",
        "99" => "Outros",
        _ => "",
    }
}

/// Card brand label for a `tBand` code.
pub fn card_brand(code: &str) -> &'static str {
    match code.trim() {
        "01" => "Visa",
        "02" => "MasterCard",
        "03" => "Amex",
        "04" => "Sorocred",
        "05" => "Diners",
        "06" => "Elo",
        "07" => "HiperCard",
        "08" => "Aura",
        "09" => "Cabal",
        "10" => "Alelo",
        "11" => "Banes",
        "12" => "CalCard",
        "13" => "Credz",
        "14" => "Discover",
        "15" => "GoodCard",
        "16" => "GreenCard",
        "17" => "Hiper",
        "18" => "Jcb",
        "19" => "Mais",
        "20" => "Maxvan",
        "21" => "PoliCard",
        "22" => "RedeCompras",
        "23" => "Sodexo",
        "24" => "Valecard",
        "25" => "VeroCheque",
        "26" => "Vr",
        "27" => "Ticket",
        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_payment_methods() {
        assert_eq!(payment_method("01"), "Dinheiro");
        assert_eq!(payment_method("17"), "PIX Dinâmico");
        assert_eq!(payment_method(" 99 "), "Outros");
    }

    #[test]
    fn test_unknown_codes_are_empty() {
        assert_eq!(payment_method("42"), "");
        assert_eq!(payment_method(""), "");
        assert_eq!(card_brand("99"), "");
    }

    #[test]
    fn test_card_brands() {
        assert_eq!(card_brand("01"), "Visa");
        assert_eq!(card_brand("27"), "Ticket");
    }
}
