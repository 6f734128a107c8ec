use super::{preamble, AgentDefinition};
use crate::prompts::EDUCATOR;
use crate::stage::Prompt;
use crate::stages::{FinalizeStage, Flag, PromptStage, ResultCompiler};
use eduflow_core::Capabilities;

const CLASS_DATA: &str = "\
Process classroom performance data:
Analysis Request: {prompt}
Grade Levels: {grades}
Context Data:
{metadata}

Data Processing Tasks:
1. Identify key performance indicators
2. Calculate class averages and distributions
3. Detect learning pace variations
4. Identify struggling and advanced students
5. Analyze engagement patterns
6. Process assessment data trends

Provide comprehensive data analysis.";

const CLASS_PATTERNS: &str = "\
Analyze learning patterns:
Performance Analysis: {performance_analysis}
Request: {prompt}
Grades: {grades}

Pattern Analysis:
1. Identify learning progression patterns
2. Detect common misconceptions or difficulties
3. Analyze participation and engagement trends
4. Identify successful teaching strategies
5. Recognize at-risk students early
6. Track skill development across time

Provide detailed pattern analysis.";

const CLASS_INSIGHTS: &str = "\
Generate actionable insights:
Performance Analysis: {performance_analysis}
Learning Patterns: {learning_patterns}

Insight Generation:
1. Key findings about class performance
2. Critical success factors identified
3. Areas needing immediate attention
4. Positive trends to reinforce
5. Predictive indicators for future performance
6. Comparative analysis with grade-level expectations

Generate comprehensive insights.";

const CLASS_RECOMMENDATIONS: &str = "\
Create specific recommendations:
Insights: {insights}
Context: Multi-grade classroom, Grades {grades}

Recommendation Categories:
1. Immediate interventions needed
2. Pacing adjustments for different groups
3. Differentiation strategies
4. Student support interventions
5. Curriculum emphasis adjustments
6. Assessment and feedback improvements

Compile comprehensive analytics report.";

const ANALYTICS_REPORT: &str = "\
CLASSROOM ANALYTICS REPORT

Analysis Subject: {prompt}
Grade Levels: {grades}

PERFORMANCE DATA ANALYSIS:
{performance_analysis}

LEARNING PATTERNS IDENTIFIED:
{learning_patterns}

KEY INSIGHTS:
{insights}

RECOMMENDATIONS AND ACTION ITEMS:
{response}

MONITORING PLAN:
1. Weekly progress check-ins with identified students
2. Bi-weekly assessment of implemented strategies
3. Monthly review of class-wide trends
4. Quarterly comprehensive performance evaluation
5. Continuous engagement monitoring
6. Regular parent communication for at-risk students";

pub fn classroom_analytics() -> AgentDefinition {
    let workflow = preamble("classroom-analytics")
        .stage(PromptStage::new(
            "performance_data_processing",
            "performance_analysis",
            Prompt::new(
                "You are an expert educational data analyst specializing in classroom performance metrics.",
                CLASS_DATA,
            ),
            "Performance data processed and analyzed",
        ))
        .stage(PromptStage::new(
            "learning_pattern_analysis",
            "learning_patterns",
            Prompt::new(
                "You are an expert in educational pattern recognition and learning analytics.",
                CLASS_PATTERNS,
            ),
            "Learning patterns and trends analyzed",
        ))
        .stage(PromptStage::new(
            "insight_generation",
            "insights",
            Prompt::new(
                "You are an expert educational consultant specializing in actionable classroom insights.",
                CLASS_INSIGHTS,
            ),
            "Actionable insights generated from analysis",
        ))
        .stage(
            ResultCompiler::new(
                "recommendation_creation",
                ANALYTICS_REPORT,
                "Comprehensive analytics report with recommendations created",
            )
            .closing(Prompt::new(EDUCATOR, CLASS_RECOMMENDATIONS))
            .flag("report_type", Flag::text("comprehensive_classroom_analytics"))
            .flag("grades_analyzed", Flag::Grades)
            .flag("includes_recommendations", Flag::yes())
            .flag("includes_monitoring_plan", Flag::yes())
            .flag("actionable_insights", Flag::yes()),
        )
        .stage(FinalizeStage);

    AgentDefinition {
        id: "classroom-analytics",
        name: "Classroom Analytics",
        capabilities: Capabilities::new(
            "Provide classroom analytics and performance insights",
            &[
                "Learning progress tracking",
                "Engagement analytics",
                "Pacing recommendations",
                "Intervention suggestions",
                "Class-wide pattern analysis",
                "Individual student insights",
            ],
            &["performance_reports", "recommendation_lists", "trend_analysis"],
            &["data_analysis", "educational_metrics", "performance_tracking"],
        ),
        workflow,
    }
}

const AUDIO_CRITERIA: &str = "\
Setup audio assessment criteria:
Assessment Focus: {prompt}
Grade Levels: {grades}
Languages: {languages}

Assessment Criteria Setup:
1. Reading fluency benchmarks for each grade
2. Pronunciation accuracy standards
3. Speaking clarity expectations
4. Pace and rhythm guidelines
5. Language-specific assessment criteria
6. Cultural sensitivity considerations

Create comprehensive assessment criteria.";

const AUDIO_REQUIREMENTS: &str = "\
Analyze audio assessment requirements:
Assessment Criteria: {assessment_criteria}
Grades: {grades}
Languages: {languages}

Audio Analysis Requirements:
1. Technical specifications for audio recording
2. Minimum quality standards for assessment
3. Duration requirements for different grade levels
4. Content types suitable for audio assessment
5. Environmental considerations for recording
6. Accessibility accommodations needed

Provide comprehensive audio requirements analysis.";

const AUDIO_RUBRIC: &str = "\
Create comprehensive assessment rubric:
Assessment Criteria: {assessment_criteria}
Audio Requirements: {audio_requirements}
Target Grades: {grades}

Rubric Creation:
1. Detailed scoring criteria for each assessment dimension
2. Grade-specific performance expectations
3. Language-specific evaluation standards
4. Holistic and analytical scoring options
5. Progress tracking indicators
6. Intervention trigger points

Create detailed, actionable assessment rubric.";

const AUDIO_FEEDBACK: &str = "\
Generate personalized feedback framework:
Assessment Rubric: {assessment_rubric}
Target Grades: {grades}
Languages: {languages}

Feedback Framework:
1. Constructive feedback templates
2. Strength recognition strategies
3. Improvement area identification
4. Actionable next steps guidance
5. Parent communication templates
6. Self-assessment tools for students

Compile complete audio assessment system.";

const AUDIO_SYSTEM: &str = "\
AUDIO READING ASSESSMENT SYSTEM

Assessment Focus: {prompt}
Grade Levels: {grades}
Languages Supported: {languages}

ASSESSMENT CRITERIA AND STANDARDS:
{assessment_criteria}

TECHNICAL AND PEDAGOGICAL REQUIREMENTS:
{audio_requirements}

COMPREHENSIVE ASSESSMENT RUBRIC:
{assessment_rubric}

PERSONALIZED FEEDBACK FRAMEWORK:
{response}

IMPLEMENTATION GUIDELINES:
1. Ensure quiet recording environment
2. Use consistent recording equipment
3. Provide clear instructions to students
4. Allow practice sessions before assessment
5. Consider cultural and linguistic backgrounds
6. Maintain supportive, encouraging atmosphere";

pub fn audio_assessment() -> AgentDefinition {
    let workflow = preamble("audio-assessment")
        .stage(PromptStage::new(
            "assessment_criteria_setup",
            "assessment_criteria",
            Prompt::new(
                "You are an expert in reading and speaking assessment, specializing in multilingual evaluation.",
                AUDIO_CRITERIA,
            ),
            "Audio assessment criteria established",
        ))
        .stage(PromptStage::new(
            "audio_requirements_analysis",
            "audio_requirements",
            Prompt::new(
                "You are an expert in educational audio technology and assessment methodology.",
                AUDIO_REQUIREMENTS,
            ),
            "Audio technical and pedagogical requirements analyzed",
        ))
        .stage(PromptStage::new(
            "assessment_rubric_creation",
            "assessment_rubric",
            Prompt::new(EDUCATOR, AUDIO_RUBRIC),
            "Comprehensive assessment rubric created",
        ))
        .stage(
            ResultCompiler::new(
                "feedback_framework_generation",
                AUDIO_SYSTEM,
                "Complete audio assessment system with feedback framework created",
            )
            .closing(Prompt::new(
                "You are an expert in educational feedback and student communication.",
                AUDIO_FEEDBACK,
            ))
            .flag("assessment_type", Flag::text("comprehensive_audio_reading_assessment"))
            .flag("grades_supported", Flag::Grades)
            .flag("languages_supported", Flag::Languages)
            .flag("includes_rubric", Flag::yes())
            .flag("includes_feedback", Flag::yes())
            .flag("multilingual_capable", Flag::yes()),
        )
        .stage(FinalizeStage);

    AgentDefinition {
        id: "audio-assessment",
        name: "Audio Reading Assessment",
        capabilities: Capabilities::new(
            "Evaluate reading and speaking skills through audio analysis",
            &[
                "Reading fluency assessment",
                "Pronunciation evaluation",
                "Speaking clarity analysis",
                "Pace and rhythm assessment",
                "Multilingual audio evaluation",
                "Personalized feedback generation",
            ],
            &["assessment_report", "feedback_summary", "improvement_plan"],
            &["audio_analysis", "reading_assessment", "speaking_evaluation"],
        ),
        workflow,
    }
}

const STUDENT_DATA: &str = "\
Process comprehensive performance data:
Student Data: {prompt}
Subject: {subject}
Grade Levels: {grades}
Analysis Context:
{metadata}

Data Processing Tasks:
1. Analyze academic achievement patterns
2. Evaluate learning progression over time
3. Identify engagement and participation trends
4. Assess skill development across subjects
5. Compare performance to grade-level expectations
6. Identify critical learning gaps

Provide comprehensive performance analysis.";

const STUDENT_PATTERNS: &str = "\
Identify learning patterns and preferences:
Performance Analysis: {performance_data_analysis}
Student Context: {prompt}
Grade Levels: {grades}

Learning Pattern Analysis:
1. Identify preferred learning modalities
2. Recognize optimal learning conditions
3. Determine effective teaching strategies
4. Identify motivation triggers
5. Assess cognitive processing preferences
6. Recognize social learning preferences

Provide detailed learning pattern analysis.";

const STRENGTHS: &str = "\
Analyze strengths and areas for improvement:
Performance Data: {performance_data_analysis}
Learning Patterns: {learning_patterns}

Strengths and Weaknesses Analysis:
1. Identify academic strengths and talents
2. Recognize areas needing improvement
3. Assess transferable skills and abilities
4. Identify hidden potential areas
5. Recognize emotional and social strengths
6. Prioritize intervention areas

Provide comprehensive strengths and improvement areas analysis.";

const PERSONALIZED: &str = "\
Create personalized recommendations:
Strengths/Weaknesses: {strengths_weaknesses}
Learning Patterns: {learning_patterns}
Grade Levels: {grades}

Personalized Recommendations:
1. Specific intervention strategies
2. Learning support accommodations
3. Enrichment and extension opportunities
4. Teaching strategy adjustments
5. Assessment modification suggestions
6. Home support recommendations

Create comprehensive, actionable recommendations.";

const LEARNING_PATH: &str = "\
Design personalized learning path:
Recommendations: {personalized_recommendations}
Student Context: {prompt}
Grade Levels: {grades}
Languages: {languages}

Learning Path Design:
1. Short-term learning goals (1-3 months)
2. Medium-term objectives (3-6 months)
3. Long-term aspirations (6-12 months)
4. Specific skill development sequence
5. Milestone checkpoints and assessments
6. Adaptive path modifications based on progress

Compile complete performance analysis report.";

const PERFORMANCE_REPORT: &str = "\
COMPREHENSIVE PERFORMANCE ANALYSIS & LEARNING PATH

Student Analysis Focus: {prompt}
Grade Levels: {grades}

PERFORMANCE DATA ANALYSIS:
{performance_data_analysis}

LEARNING PATTERNS AND PREFERENCES:
{learning_patterns}

STRENGTHS AND IMPROVEMENT AREAS:
{strengths_weaknesses}

PERSONALIZED RECOMMENDATIONS:
{personalized_recommendations}

CUSTOMIZED LEARNING PATH:
{response}

COMMUNICATION GUIDELINES:
- Use positive, strength-based language
- Focus on growth and improvement potential
- Provide specific, actionable feedback
- Encourage self-reflection and goal setting
- Celebrate progress and achievements regularly";

pub fn performance_analysis() -> AgentDefinition {
    let workflow = preamble("performance-analysis")
        .input("subject")
        .input("student_data")
        .stage(PromptStage::new(
            "performance_data_processing",
            "performance_data_analysis",
            Prompt::new(
                "You are an expert educational psychologist specializing in student performance analysis.",
                STUDENT_DATA,
            ),
            "Comprehensive performance data processed",
        ))
        .stage(PromptStage::new(
            "learning_pattern_identification",
            "learning_patterns",
            Prompt::new(
                "You are an expert in learning styles and educational psychology.",
                STUDENT_PATTERNS,
            ),
            "Individual learning patterns identified",
        ))
        .stage(PromptStage::new(
            "strengths_weaknesses_analysis",
            "strengths_weaknesses",
            Prompt::new(
                "You are an expert in educational assessment and student development.",
                STRENGTHS,
            ),
            "Student strengths and improvement areas analyzed",
        ))
        .stage(PromptStage::new(
            "personalized_recommendations_creation",
            "personalized_recommendations",
            Prompt::new(EDUCATOR, PERSONALIZED),
            "Personalized recommendations created",
        ))
        .stage(
            ResultCompiler::new(
                "learning_path_design",
                PERFORMANCE_REPORT,
                "Comprehensive performance analysis and learning path completed",
            )
            .closing(Prompt::new(
                "You are an expert in personalized learning design and educational planning.",
                LEARNING_PATH,
            ))
            .flag(
                "analysis_type",
                Flag::text("comprehensive_performance_analysis_with_learning_path"),
            )
            .flag("grades_covered", Flag::Grades)
            .flag("includes_recommendations", Flag::yes())
            .flag("includes_learning_path", Flag::yes())
            .flag("personalized", Flag::yes())
            .flag("culturally_appropriate", Flag::yes()),
        )
        .stage(FinalizeStage);

    AgentDefinition {
        id: "performance-analysis",
        name: "Performance Analysis & Recommendations",
        capabilities: Capabilities::new(
            "Analyze student performance and provide personalized recommendations",
            &[
                "Comprehensive performance analysis",
                "Learning style identification",
                "Personalized learning path creation",
                "Strength and weakness assessment",
                "Intervention recommendations",
                "Parent communication summaries",
            ],
            &["performance_report", "learning_path", "intervention_plan"],
            &["data_analysis", "learning_personalization", "educational_psychology"],
        ),
        workflow,
    }
}
