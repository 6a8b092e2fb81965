// Prompt constants for filter extraction.

/// Filter-extraction prompt template. Replace `{query}` before sending.
pub const FILTER_EXTRACTION_PROMPT_TEMPLATE: &str = r#"Analyze this product search query and extract relevant filters in JSON format:

Query: "{query}"

Extract:
- category: product category/type (e.g., "shoes", "electronics", "clothing")
- max_price: maximum price if mentioned (number only)
- min_price: minimum price if mentioned (number only)
- min_rating: minimum rating if mentioned (1-5 scale)
- keywords: important product features or brands mentioned

Return valid JSON only:
{
    "category": "category_name or null",
    "max_price": number_or_null,
    "min_price": number_or_null,
    "min_rating": number_or_null,
    "keywords": ["keyword1", "keyword2"] or null
}"#;

pub fn filter_extraction_prompt(query: &str) -> String {
    FILTER_EXTRACTION_PROMPT_TEMPLATE.replace("{query}", query)
}
