//! Test fixtures for export parsing

use std::io::Write;
use tempfile::NamedTempFile;

mod standard_tests;

/// Write content to a temporary file and return its handle
pub fn temp_export(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

/// A raw export with preamble rows, a repeated header, and two data rows
pub fn raw_export_with_header() -> &'static str {
    "Relatório de Estoque,,,\n\
     gerado em 2024-03-01,,,\n\
     Loja,Departamento: Rações,Valor Custo,SKU,Descricao,Estoque,Unid,Preco,Custo\n\
     Loja,Departamento: Rações,\"123,45\",SKU001,Racao Golden 10kg,5,Un,\"89,90\",\"45,50\"\n\
     Loja,Departamento: Aquarismo,\"3,20\",SKU002,Bomba Sarlo Better 100,2,Un,\"55,00\",\"30,00\"\n"
}

/// A standard export already shaped one row per product
pub fn standard_export() -> &'static str {
    "SKU,Name,Regular price,Categories,Stock\n\
     A1,Produto Pronto,10.00,Rações,4\n\
     B2,Outro Produto,5.50,Geral,0\n"
}
