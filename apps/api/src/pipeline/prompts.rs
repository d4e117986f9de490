// LLM prompt constants for the extraction pipeline.

/// Resume extraction prompt template. Replace `{context}` before sending.
///
/// The JSON template is the extraction contract: the five top-level keys are
/// mandatory and unknown fields are left as empty strings, never invented.
pub const RESUME_EXTRACT_PROMPT_TEMPLATE: &str = r#"You are an assistant that extracts resume details and outputs them in a strict JSON format.
Do not include any markdown formatting, triple backticks, or extra commentary.
Use the exact JSON template below. If a field is not found in the resume, leave it as an empty string.

JSON Template:
{
    "personal_information": {
        "name": "",
        "email": "",
        "phone": "",
        "location": ""
    },
    "education": {
        "current_level": "",
        "institution": "",
        "field": "",
        "graduation_year": "",
        "cgpa": ""
    },
    "technical_skills": [
        {"name": "", "level": ""}
    ],
    "soft_skills": [
        {"name": "", "level": ""}
    ],
    "languages": [
        {"name": "", "proficiency": ""}
    ]
}

Below is context extracted from the resume:
{context}

Based on the above, fill in the JSON template with the most likely information from the resume."#;
