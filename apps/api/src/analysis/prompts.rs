// LLM prompt constants for the structured analysis call.
// The template names every required output field, pins numeric fields to
// 0-100 integers, and forbids anything outside a single JSON object.

/// System prompt for resume analysis — enforces JSON-only output.
pub const ANALYSIS_SYSTEM: &str = "You are an expert ATS resume analyst. \
    Provide a structured, actionable resume analysis and optimization \
    suggestions in JSON format. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Analysis prompt template. Replace `{resume_text}` and
/// `{job_description}` before sending.
pub const ANALYSIS_PROMPT_TEMPLATE: &str = r#"Analyze the resume against the job description and return ONLY this exact JSON with no extra text, no markdown, no backticks:

{
  "success": true,
  "analysis": {
    "resume_skills": [],
    "job_description_skills": [],
    "missing_skills": {
      "from_resume_for_job_description": [],
      "from_job_description_for_resume": []
    },
    "ats_optimized_bullet_point_improvements": [
      {
        "original_summary": "",
        "suggested_bullets": [],
        "reasoning": ""
      }
    ],
    "ats_optimization_tips": [],
    "compatibility_score": 0,
    "content_analysis": {
      "ats_parse_rate": 0,
      "keyword_match": 0,
      "impact_score": 0,
      "readability_score": 0
    },
    "overall_assessment": ""
  }
}

Rules for content_analysis scores (all 0-100 integers):
- ats_parse_rate: How well resume structure/format will be parsed by ATS bots (based on formatting, sections, headers).
- keyword_match: Percentage of job description keywords found in the resume.
- impact_score: How impactful and quantified the resume's bullet points are (use of metrics, action verbs, achievements).
- readability_score: Clarity, conciseness, and professionalism of the resume language.

compatibility_score must also be a 0-100 integer.

Resume:
{resume_text}

Job Description:
{job_description}"#;
