// LLM prompt constants for the Recommendation module.

/// Course recommendation prompt template.
/// Replace `{content}` and `{performance}` before sending.
pub const RECOMMEND_PROMPT_TEMPLATE: &str = r#"Analyze this student report and generate personalized course recommendations:

Report Content:
{content}

Performance Score: {performance}%

Generate detailed course recommendations in this exact JSON format:
{
  "recommended": [
    {
      "topic": "Category Name",
      "courses": [
        {
          "id": "unique-id",
          "title": "Course Title",
          "platform": "Platform Name",
          "level": "Difficulty Level",
          "duration": "Course Duration",
          "progress": 0,
          "xp": 100,
          "outcomes": ["Learning Outcome 1", "Outcome 2"],
          "prerequisites": ["Prerequisite 1", "Prerequisite 2"]
        }
      ]
    }
  ],
  "trending": [],
  "new": []
}

Rules:
1. Focus on areas where the student needs improvement
2. Recommend real, available courses from known platforms (Coursera, edX, Udemy)
3. Include 2-3 topics with 2-3 courses each
4. Ensure valid JSON format without any markdown
5. Return ONLY the JSON object
"#;
