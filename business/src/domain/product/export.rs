use chrono::NaiveDate;

use super::model::Product;

const CSV_HEADERS: [&str; 8] = [
    "ID",
    "Nom",
    "Catégorie",
    "Fournisseur",
    "Prix",
    "Quantité",
    "Date d'ajout",
    "Description",
];

/// Quotes a CSV field, doubling embedded quotes (RFC 4180).
fn csv_field(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

/// Renders the catalog as comma-separated text: one fixed header row, one
/// row per product, every data field quoted.
pub fn catalog_csv(products: &[Product]) -> String {
    let mut rows = Vec::with_capacity(products.len() + 1);
    rows.push(CSV_HEADERS.join(","));

    for product in products {
        let fields = [
            product.id.to_string(),
            product.name.clone(),
            product.category.clone(),
            product.supplier.clone(),
            product.price.to_string(),
            product.quantity.to_string(),
            product.added_date.to_string(),
            product.description.clone(),
        ];
        rows.push(
            fields
                .iter()
                .map(|field| csv_field(field))
                .collect::<Vec<_>>()
                .join(","),
        );
    }

    rows.join("\n")
}

/// Download name for a CSV export generated on the given date.
pub fn csv_filename(date: NaiveDate) -> String {
    format!("produits_{}.csv", date.format("%Y-%m-%d"))
}

/// Renders the catalog as a self-contained printable HTML document.
pub fn printable_catalog(products: &[Product], generated_on: NaiveDate) -> String {
    let rows: String = products
        .iter()
        .map(|product| {
            format!(
                "        <tr>\n          <td>{}</td>\n          <td>{}</td>\n          <td>{} €</td>\n          <td>{}</td>\n          <td>{}</td>\n          <td>{}</td>\n        </tr>\n",
                product.name,
                product.category,
                product.price,
                product.quantity,
                product.stock_status(),
                product.added_date,
            )
        })
        .collect();

    format!(
        r#"<html>
  <head>
    <title>Catalogue de Produits</title>
    <style>
      body {{ font-family: Arial, sans-serif; margin: 20px; }}
      h1 {{ color: #333; }}
      table {{ width: 100%; border-collapse: collapse; margin-top: 20px; }}
      th, td {{ border: 1px solid #ddd; padding: 12px; text-align: left; }}
      th {{ background-color: #f5f5f5; font-weight: bold; }}
      tr:nth-child(even) {{ background-color: #f9f9f9; }}
      .date {{ color: #666; font-size: 12px; }}
    </style>
  </head>
  <body>
    <h1>Catalogue de Produits</h1>
    <p class="date">Généré le: {}</p>
    <table>
      <thead>
        <tr>
          <th>Nom</th>
          <th>Catégorie</th>
          <th>Prix</th>
          <th>Quantité</th>
          <th>Stock</th>
          <th>Date d'ajout</th>
        </tr>
      </thead>
      <tbody>
{}      </tbody>
    </table>
  </body>
</html>
"#,
        generated_on.format("%d/%m/%Y"),
        rows,
    )
}
