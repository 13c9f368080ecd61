//! Storefront description generation
//!
//! Descriptions are a pure function of the derived fields (name, category,
//! brand, weight): the same inputs always produce byte-identical output.
//! The long description is the storefront's HTML block — intro paragraph,
//! feature list in fixed order, closing call-to-action — with the brand and
//! weight entries present only when known.

use crate::constants::STORE_NAME;

/// One-line description for listing views
pub fn short_description(name: &str, category: &str, brand: Option<&str>) -> String {
    let mut text = name.to_string();
    if let Some(brand) = brand {
        text.push_str(&format!(" | Marca: {brand}"));
    }
    text.push_str(&format!(" | Categoria: {category} | {STORE_NAME}"));
    text
}

/// Full HTML description for the product page
pub fn full_description(
    name: &str,
    category: &str,
    brand: Option<&str>,
    weight_kg: Option<&str>,
) -> String {
    let mut intro = String::from("<p>");
    match brand {
        Some(brand) => {
            intro.push_str(&format!("Produto <strong>{brand}</strong> da linha {category}. "));
        }
        None => {
            intro.push_str(&format!("Produto de alta qualidade da categoria {category}. "));
        }
    }
    intro.push_str(&format!("Disponível na <strong>{STORE_NAME}</strong> com "));
    if let Some(weight) = weight_kg {
        intro.push_str(&format!("<strong>{weight}kg</strong> e "));
    }
    intro.push_str("melhor custo-benefício.</p>");

    let mut features = String::from("<ul class='product-features'>");
    if let Some(brand) = brand {
        features.push_str(&format!("<li>🏷️ <strong>Marca:</strong> {brand}</li>"));
    }
    if let Some(weight) = weight_kg {
        features.push_str(&format!("<li>⚖️ <strong>Peso/Conteúdo:</strong> {weight} Kg</li>"));
    }
    features.push_str(&format!("<li>📦 <strong>Categoria:</strong> {category}</li>"));
    features.push_str("<li>✅ <strong>Produto Original</strong> com garantia</li>");
    features.push_str("<li>🚚 <strong>Entrega Rápida</strong> para todo o Brasil</li>");
    features.push_str("<li>💳 <strong>Diversas formas de pagamento</strong></li></ul>");

    let cta = format!(
        "<div class='cta-section'>\
         <p>📞 <strong>Dúvidas?</strong> Nossa equipe está pronta para ajudar!</p>\
         <p>⭐ <strong>{STORE_NAME}</strong> - Sua loja de confiança!</p>\
         </div>"
    );

    format!("<div class='product-description'><h2>{name}</h2>{intro}{features}{cta}</div>")
}
